#![warn(missing_docs)]

//! # multtable
//!
//! An interactive multiplication-table generator for the terminal, built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! Four text fields take the column and row bounds of the table. Submitting
//! the form validates them against six independent checks (blank input,
//! non-numeric input, non-integer values, inverted bounds, spans over 100,
//! magnitudes over one quadrillion) and reports *every* failed check at
//! once; when all of them pass, the table of row×column products is rebuilt
//! in place.
//!
//! Each piece follows the Elm Architecture pattern with `update()` and
//! `view()` methods, so the interesting parts stay pure and testable:
//!
//! - [`validate`] turns the four raw strings into validated bounds or a
//!   composed error report, with no terminal involved.
//! - [`table`] generates the grid through the [`table::Sink`] trait and
//!   renders it as aligned text.
//! - [`field`] is a minimal single-line text input.
//! - [`form`] wires fields, validator, error display, and table into the
//!   `bubbletea_rs::Model` the binary runs.
//! - [`key`] provides the type-safe key bindings the components share.
//!
//! ## Example
//!
//! ```rust
//! use multtable::table;
//! use multtable::validate::{validate, FormInput};
//!
//! let input = FormInput {
//!     min_col: "2".into(),
//!     max_col: "3".into(),
//!     min_row: "5".into(),
//!     max_row: "6".into(),
//! };
//!
//! let bounds = validate(&input).unwrap();
//! let mut grid = table::Model::new();
//! table::generate(&bounds, &mut grid);
//! assert_eq!(grid.row_count(), 3);
//! ```

pub mod field;
pub mod form;
pub mod key;
pub mod table;
pub mod validate;

use bubbletea_rs::Cmd;

/// Focus management for components that accept keyboard input.
///
/// Exactly one form field holds focus at a time; the form blurs the old
/// field and focuses the new one as the user moves through the inputs.
pub trait Component {
    /// Sets the component to focused state. May return a command for
    /// initialization work.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus from the component.
    fn blur(&mut self);

    /// Reports whether the component is focused.
    fn focused(&self) -> bool;
}

/// Convenience re-exports of the crate's main types.
pub mod prelude {
    pub use crate::field::Model as Field;
    pub use crate::form::{new as form_new, FormKeyMap, Model as Form};
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::table::{generate, Cell, Model as Table, Row, Sink};
    pub use crate::validate::{validate, Bounds, ErrorKind, Errors, FormInput, Num};
    pub use crate::Component;
}
