//! The multiplication-table form.
//!
//! Four bound fields, an error display, and the generated table, composed
//! into one Elm-architecture model. Enter submits the form: the raw field
//! values are validated, and either the table is rebuilt or the error
//! display shows every failed check. A failed submission leaves the
//! previously generated table on screen.

use crate::key::{self, matches_binding, KeyMap as KeyMapTrait};
use crate::table;
use crate::validate::{validate, FormInput};
use crate::{field, Component};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;

const FIELD_COUNT: usize = 4;

const LABELS: [&str; FIELD_COUNT] = [
    "Minimum column value",
    "Maximum column value",
    "Minimum row value",
    "Maximum row value",
];

/// Key bindings for navigating and submitting the form.
#[derive(Debug, Clone)]
pub struct FormKeyMap {
    /// Focus the next field.
    pub next_field: key::Binding,
    /// Focus the previous field.
    pub prev_field: key::Binding,
    /// Validate the input and rebuild the table.
    pub submit: key::Binding,
    /// Quit the program.
    pub quit: key::Binding,
}

impl Default for FormKeyMap {
    fn default() -> Self {
        Self {
            next_field: key::new_binding(vec![
                key::with_keys_str(&["tab", "down"]),
                key::with_help("tab/↓", "next field"),
            ]),
            prev_field: key::new_binding(vec![
                key::with_keys_str(&["shift+tab", "up"]),
                key::with_help("shift+tab/↑", "prev field"),
            ]),
            submit: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "generate table"),
            ]),
            quit: key::new_binding(vec![
                key::with_keys_str(&["esc", "ctrl+c"]),
                key::with_help("esc", "quit"),
            ]),
        }
    }
}

impl KeyMapTrait for FormKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.next_field, &self.submit, &self.quit]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.next_field, &self.prev_field],
            vec![&self.submit, &self.quit],
        ]
    }
}

/// The form model.
pub struct Model {
    fields: [field::Model; FIELD_COUNT],
    focus_index: usize,
    error: String,
    /// The generated table; empty until the first successful submission.
    pub table: table::Model,
    /// Key bindings for the form.
    pub key_map: FormKeyMap,
    /// Style for the title line.
    pub title_style: Style,
    /// Style for field labels.
    pub label_style: Style,
    /// Style for the label of the focused field.
    pub focused_label_style: Style,
    /// Style for the error display.
    pub error_style: Style,
    /// Style for key labels in the help line.
    pub help_key_style: Style,
    /// Style for descriptions in the help line.
    pub help_desc_style: Style,
}

/// Creates a new form with the first field focused.
pub fn new() -> Model {
    let mut fields: [field::Model; FIELD_COUNT] = [
        field::new(),
        field::new(),
        field::new(),
        field::new(),
    ];
    for field in &mut fields {
        field.placeholder = "0".to_string();
    }
    fields[0].focus();

    Model {
        fields,
        focus_index: 0,
        error: String::new(),
        table: table::new(),
        key_map: FormKeyMap::default(),
        title_style: Style::new().bold(true),
        label_style: Style::new().foreground(Color::from("240")),
        focused_label_style: Style::new().foreground(Color::from("212")),
        error_style: Style::new().foreground(Color::from("9")),
        help_key_style: Style::new().foreground(Color::from("241")),
        help_desc_style: Style::new().foreground(Color::from("239")),
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// The index of the focused field.
    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    /// The current error display text; empty after a successful submission.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// The raw values of the four fields.
    pub fn input(&self) -> FormInput {
        FormInput {
            min_col: self.fields[0].value(),
            max_col: self.fields[1].value(),
            min_row: self.fields[2].value(),
            max_row: self.fields[3].value(),
        }
    }

    /// Moves focus to the next field, wrapping at the end.
    pub fn focus_next(&mut self) -> Option<Cmd> {
        self.set_focus((self.focus_index + 1) % FIELD_COUNT)
    }

    /// Moves focus to the previous field, wrapping at the start.
    pub fn focus_prev(&mut self) -> Option<Cmd> {
        self.set_focus((self.focus_index + FIELD_COUNT - 1) % FIELD_COUNT)
    }

    fn set_focus(&mut self, index: usize) -> Option<Cmd> {
        self.fields[self.focus_index].blur();
        self.focus_index = index;
        self.fields[self.focus_index].focus()
    }

    /// Submits the form: validates the raw input, then either rebuilds the
    /// table and clears the error display, or writes the error report and
    /// leaves the table as it was.
    pub fn submit(&mut self) {
        match validate(&self.input()) {
            Ok(bounds) => {
                table::generate(&bounds, &mut self.table);
                self.error.clear();
            }
            Err(message) => self.error = message,
        }
    }

    /// Handles a message: navigation and submission first, everything else
    /// goes to the focused field.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if matches_binding(key_msg, &self.key_map.quit) {
                return Some(bubbletea_rs::quit());
            }
            if matches_binding(key_msg, &self.key_map.submit) {
                self.submit();
                return None;
            }
            if matches_binding(key_msg, &self.key_map.next_field) {
                return self.focus_next();
            }
            if matches_binding(key_msg, &self.key_map.prev_field) {
                return self.focus_prev();
            }
        }

        self.fields[self.focus_index].update(&msg)
    }

    /// Renders the form: title, fields, error display or table, help line.
    pub fn view(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.title_style.render("Multiplication Table"));
        out.push_str("\n\n");

        let label_width = LABELS.iter().map(|l| l.len()).max().unwrap_or(0);
        for (i, field) in self.fields.iter().enumerate() {
            let style = if i == self.focus_index {
                &self.focused_label_style
            } else {
                &self.label_style
            };
            let label = format!("{:>width$}", LABELS[i], width = label_width);
            out.push_str(&style.render(&label));
            out.push_str(": ");
            out.push_str(&field.view());
            out.push('\n');
        }
        out.push('\n');

        if !self.error.is_empty() {
            out.push_str(&self.error_style.render(self.error.trim_end()));
            out.push_str("\n\n");
        }

        if !self.table.is_empty() {
            out.push_str(&self.table.view());
            out.push('\n');
        }

        out.push_str(&self.help_view());
        out.push('\n');
        out
    }

    fn help_view(&self) -> String {
        let mut parts = Vec::new();
        for binding in self.key_map.short_help() {
            if !binding.enabled() {
                continue;
            }
            parts.push(format!(
                "{} {}",
                self.help_key_style.render(&binding.help().key),
                self.help_desc_style.render(&binding.help().desc)
            ));
        }
        parts.join(&self.help_desc_style.render(" • "))
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ErrorKind;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode, mods: KeyModifiers) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: mods,
        })
    }

    fn plain() -> Model {
        // Identity styles keep view assertions free of escape codes.
        let mut form = new();
        form.title_style = Style::new();
        form.label_style = Style::new();
        form.focused_label_style = Style::new();
        form.error_style = Style::new();
        form.help_key_style = Style::new();
        form.help_desc_style = Style::new();
        for field in &mut form.fields {
            field.prompt_style = Style::new();
            field.text_style = Style::new();
            field.placeholder_style = Style::new();
            field.cursor_style = Style::new();
        }
        form
    }

    fn fill(form: &mut Model, values: [&str; 4]) {
        for (field, value) in form.fields.iter_mut().zip(values) {
            field.set_value(value);
        }
    }

    #[test]
    fn test_first_field_starts_focused() {
        let form = new();
        assert_eq!(form.focus_index(), 0);
        assert!(form.fields[0].focused());
        assert!(!form.fields[1].focused());
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut form = new();
        for expected in [1, 2, 3, 0] {
            form.update(press(KeyCode::Tab, KeyModifiers::NONE));
            assert_eq!(form.focus_index(), expected);
        }
        form.update(press(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(form.focus_index(), 3);
        assert!(form.fields[3].focused());
        assert!(!form.fields[0].focused());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = new();
        form.update(press(KeyCode::Char('7'), KeyModifiers::NONE));
        form.update(press(KeyCode::Tab, KeyModifiers::NONE));
        form.update(press(KeyCode::Char('9'), KeyModifiers::NONE));

        let input = form.input();
        assert_eq!(input.min_col, "7");
        assert_eq!(input.max_col, "9");
        assert_eq!(input.min_row, "");
    }

    #[test]
    fn test_submit_success_builds_table_and_clears_error() {
        let mut form = new();
        form.error = "stale".to_string();
        fill(&mut form, ["2", "3", "5", "6"]);
        form.update(press(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(form.error(), "");
        assert_eq!(form.table.row_count(), 3);
        assert_eq!(form.table.rows()[2].cells[1].text(), "12"); // 6 × 2
    }

    #[test]
    fn test_submit_failure_reports_and_keeps_old_table() {
        let mut form = new();
        fill(&mut form, ["1", "10", "1", "10"]);
        form.submit();
        assert_eq!(form.table.row_count(), 11);

        fill(&mut form, ["", "10", "1", "10"]);
        form.submit();
        assert!(form.error().contains(ErrorKind::NoInput.message()));
        // The previously generated table stays on screen.
        assert_eq!(form.table.row_count(), 11);
    }

    #[test]
    fn test_submit_succeeds_at_the_magnitude_limit() {
        let mut form = new();
        fill(&mut form, ["1e15", "1e15", "1e15", "1e15"]);
        form.update(press(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(form.error(), "");
        assert_eq!(form.table.row_count(), 2);
        assert_eq!(
            form.table.rows()[1].cells[1].text(),
            "1000000000000000000000000000000"
        );
    }

    #[test]
    fn test_error_clears_on_next_success() {
        let mut form = new();
        fill(&mut form, ["5", "3", "1", "1"]);
        form.submit();
        assert!(form.error().contains(ErrorKind::WrongOrder.message()));

        fill(&mut form, ["3", "5", "1", "1"]);
        form.submit();
        assert_eq!(form.error(), "");
    }

    #[test]
    fn test_quit_returns_command() {
        let mut form = new();
        let cmd = form.update(press(KeyCode::Esc, KeyModifiers::NONE));
        assert!(cmd.is_some());
    }

    #[test]
    fn test_view_lists_labels_and_help() {
        let form = plain();
        let view = form.view();
        for label in LABELS {
            assert!(view.contains(label), "missing label: {label}");
        }
        assert!(view.contains("generate table"));
    }

    #[test]
    fn test_view_shows_error_text() {
        let mut form = plain();
        fill(&mut form, ["0", "200", "0", "0"]);
        form.submit();
        let view = form.view();
        assert!(view.contains(ErrorKind::OutsideRange.message()));
    }

    #[test]
    fn test_view_shows_table_after_success() {
        let mut form = plain();
        form.table.header_style = Style::new();
        form.table.cell_style = Style::new();
        fill(&mut form, ["2", "3", "5", "6"]);
        form.submit();
        let view = form.view();
        assert!(view.contains("10  15"));
        assert!(view.contains("12  18"));
    }
}
