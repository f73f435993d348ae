//! Pure view-state for the gridform controls.
//!
//! Everything in this crate is plain data with synchronous transitions: the
//! column sort state machine, cell values with their sort ordering, row
//! identity keys, and the selection set. Rendering lives in `gridform-ui`;
//! this crate has no egui dependency so the state machines can be tested on
//! their own.

mod identity;
mod selection;
mod sort;
mod value;

pub use identity::RowKey;
pub use selection::SelectionState;
pub use sort::{SortDirection, SortState};
pub use value::{CellValue, sorted_indices};
