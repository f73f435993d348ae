//! Reusable egui controls: a configurable text input and a generic,
//! sortable, selectable data table.
//!
//! Both controls follow a controlled-component discipline: the caller owns
//! the canonical data (the input's `String`, the table's row slice) and the
//! control only manages transient view state, reporting intended changes
//! through its returned response.

#![warn(clippy::all, rust_2018_idioms)]

pub mod widgets;

pub use widgets::data_table::{Column, DataTable, DataTableResponse, DataTableState};
pub use widgets::input_field::{InputField, InputSize, InputVariant};

// Re-export the state types so callers never need a direct dependency on
// the states crate.
pub use gridform_states::{CellValue, RowKey, SelectionState, SortDirection, SortState};
