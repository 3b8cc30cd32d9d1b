//! The multiplication table: generation and rendering.
//!
//! [`generate`] rebuilds a table from validated [`Bounds`] into any
//! [`Sink`]. The [`Model`] in this module is the on-screen sink: it stores
//! the grid as rows of [`Cell`]s and renders them as aligned, styled text.
//! Keeping generation behind the `Sink` trait leaves the grid logic testable
//! without a terminal.
//!
//! # Examples
//!
//! ```rust
//! use multtable::table;
//! use multtable::validate::Bounds;
//!
//! let bounds = Bounds { min_col: 2, max_col: 3, min_row: 5, max_row: 6 };
//! let mut model = table::Model::new();
//! table::generate(&bounds, &mut model);
//!
//! // One header row plus one row per row index.
//! assert_eq!(model.row_count(), 3);
//! assert_eq!(model.rows()[1].cells[1].text(), "10"); // 5 × 2
//! ```

use crate::validate::Bounds;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// One cell of the table.
///
/// Header cells hold the row and column indices; data cells hold products.
/// The top-left corner of the header row is a blank *data* cell, not a
/// header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A row- or column-index cell.
    Header(String),
    /// A product cell (or the blank top-left corner).
    Data(String),
}

impl Cell {
    /// The cell's display text.
    pub fn text(&self) -> &str {
        match self {
            Cell::Header(s) | Cell::Data(s) => s,
        }
    }

    /// Whether this is a header cell.
    pub fn is_header(&self) -> bool {
        matches!(self, Cell::Header(_))
    }
}

/// One row of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// The row's cells, leftmost first.
    pub cells: Vec<Cell>,
}

/// Receives table structure from [`generate`].
///
/// Implemented by [`Model`] for on-screen rendering and by plain
/// collectors in tests.
pub trait Sink {
    /// Removes every existing row.
    fn clear(&mut self);

    /// Appends a new, empty row.
    fn append_row(&mut self);

    /// Appends a cell to the most recently appended row.
    fn append_cell(&mut self, cell: Cell);
}

/// Rebuilds the table for the given bounds into the sink.
///
/// The sink is cleared first, then a header row is written (a blank data
/// cell followed by one header cell per column index), then one row per row
/// index with its header cell and the row×column products. Bounds are
/// inclusive on both ends; inverted bounds produce no data rows or columns.
pub fn generate(bounds: &Bounds, sink: &mut impl Sink) {
    sink.clear();

    sink.append_row();
    sink.append_cell(Cell::Data(String::new()));
    for col in bounds.min_col..=bounds.max_col {
        sink.append_cell(Cell::Header(col.to_string()));
    }

    for row in bounds.min_row..=bounds.max_row {
        sink.append_row();
        sink.append_cell(Cell::Header(row.to_string()));
        for col in bounds.min_col..=bounds.max_col {
            // Bounds reach ±1e15, so products reach 1e30; widen before
            // multiplying to keep them exact.
            let product = row as i128 * col as i128;
            sink.append_cell(Cell::Data(product.to_string()));
        }
    }
}

/// The on-screen table model.
///
/// Holds the generated grid and renders it as text with right-aligned,
/// width-measured columns. Header cells get `header_style`, data cells get
/// `cell_style`.
#[derive(Debug, Clone)]
pub struct Model {
    rows: Vec<Row>,
    /// Style applied to header cells.
    pub header_style: Style,
    /// Style applied to data cells.
    pub cell_style: Style,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            header_style: Style::new().bold(true).foreground(Color::from("212")),
            cell_style: Style::new(),
        }
    }
}

/// Creates a new, empty table model with default styling.
pub fn new() -> Model {
    Model::default()
}

impl Model {
    /// Creates a new, empty table model with default styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows, header row included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the widest row, header column included.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Whether the table currently has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the grid as aligned text, one line per row.
    pub fn view(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        for row in &self.rows {
            let mut line = String::new();
            for (i, cell) in row.cells.iter().enumerate() {
                if i > 0 {
                    line.push_str("  ");
                }
                let width = widths.get(i).copied().unwrap_or(0);
                let pad = width.saturating_sub(cell.text().width());
                let padded = format!("{}{}", " ".repeat(pad), cell.text());
                let style = if cell.is_header() {
                    &self.header_style
                } else {
                    &self.cell_style
                };
                line.push_str(&style.render(&padded));
            }
            out.push_str(&line);
            out.push('\n');
        }

        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0usize; self.column_count()];
        for row in &self.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                widths[i] = widths[i].max(cell.text().width());
            }
        }
        widths
    }
}

impl Sink for Model {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self) {
        self.rows.push(Row::default());
    }

    fn append_cell(&mut self, cell: Cell) {
        if self.rows.is_empty() {
            self.rows.push(Row::default());
        }
        if let Some(row) = self.rows.last_mut() {
            row.cells.push(cell);
        }
    }
}
