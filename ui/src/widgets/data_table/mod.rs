//! Sortable, selectable table over a caller-owned row collection.
//!
//! The rendering is split into focused pieces:
//! - `columns`: column descriptors
//! - `header`: header cells with sort indicators and the select-all checkbox
//! - `row`: data rows with the per-row checkbox
//! - `cells`: cell chrome and default cell rendering
//!
//! The table never mutates the caller's rows. Sorting reorders a working
//! copy of the row indices, and selection tracks row identity keys so it
//! survives re-sorting. All transient view state lives in a caller-owned
//! [`DataTableState`]; intent is reported through [`DataTableResponse`].

mod cells;
mod columns;
mod header;
mod row;

pub use columns::{CellRenderer, Column};

use egui::{Frame, Grid, Id, Response, ScrollArea, Stroke, Ui};
use gridform_states::{CellValue, RowKey, SelectionState, SortState, sorted_indices};
use log::debug;
use serde::Serialize;
use serde_json::Value;

use cells::{TABLE_BORDER_COLOR, render_empty_row, render_loading_row};
use columns::{CELL_SPACING, MIN_COL_WIDTH};
use header::{render_header_cell, render_select_all_cell};
use row::render_data_row;

/// Transient view state for a [`DataTable`]: the active sort and the current
/// selection. Create one with `Default` when the table mounts and keep it
/// alive across frames; the table stores nothing anywhere else.
#[derive(Debug, Clone, Default)]
pub struct DataTableState {
    sort: SortState,
    selection: SelectionState,
}

impl DataTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }
}

/// What a [`DataTable`] reports back from one frame.
pub struct DataTableResponse<'a, T> {
    /// Whole-table response.
    pub response: Response,
    /// True when a header click changed the sort this frame.
    pub sort_changed: bool,
    /// True when the selection changed this frame.
    pub selection_changed: bool,
    /// The full selection in display order. Rebuilt on every selection
    /// change; empty when `selection_changed` is false.
    pub selected: Vec<&'a T>,
}

/// A sortable, optionally selectable table over `rows`.
///
/// Rows are viewed through their Serde representation, so any
/// `T: Serialize` works; a column's `data_index` names the serialized field
/// it reads. Row identity for selection comes from the primary-key field
/// (`"id"` unless overridden), falling back to the whole row's serialized
/// form. Two identical rows without a primary key then share one identity.
#[must_use = "call show(ui) to render the table"]
pub struct DataTable<'a, T> {
    rows: &'a [T],
    columns: &'a [Column<T>],
    state: &'a mut DataTableState,
    selectable: bool,
    loading: bool,
    empty_text: String,
    primary_key: &'a str,
    id_salt: Option<Id>,
}

impl<'a, T: Serialize> DataTable<'a, T> {
    pub fn new(
        rows: &'a [T],
        columns: &'a [Column<T>],
        state: &'a mut DataTableState,
    ) -> Self {
        Self {
            rows,
            columns,
            state,
            selectable: false,
            loading: false,
            empty_text: "No data".to_owned(),
            primary_key: "id",
            id_salt: None,
        }
    }

    /// Adds the selection column. Off by default.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Replaces the body with a single placeholder row.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Text shown when the row collection is empty. Defaults to "No data".
    pub fn empty_text(mut self, empty_text: impl Into<String>) -> Self {
        self.empty_text = empty_text.into();
        self
    }

    /// Field used for row identity. Defaults to `"id"`.
    pub fn primary_key(mut self, primary_key: &'a str) -> Self {
        self.primary_key = primary_key;
        self
    }

    /// Distinguishes two tables in the same container.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    pub fn show(self, ui: &mut Ui) -> DataTableResponse<'a, T> {
        let Self {
            rows,
            columns,
            state,
            selectable,
            loading,
            empty_text,
            primary_key,
            id_salt,
        } = self;

        let serialized: Vec<Value> = rows
            .iter()
            .map(|row| {
                serde_json::to_value(row).unwrap_or_else(|err| {
                    debug!("row failed to serialize, treating as empty: {err}");
                    Value::Null
                })
            })
            .collect();
        let keys: Vec<RowKey> = serialized
            .iter()
            .map(|row| RowKey::for_row(row, primary_key))
            .collect();
        let order = display_order(&serialized, &state.sort);

        let all_selected = state.selection.all_selected(order.iter().map(|&i| &keys[i]));

        // Interactions are collected during rendering and applied afterwards,
        // so the grid closure only needs shared access to the state.
        let mut clicked_sort: Option<&str> = None;
        let mut toggle_all = false;
        let mut toggled_row: Option<usize> = None;

        let response = Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt(("data_table_scroll", id_salt))
                    .show(ui, |ui| {
                        Grid::new(("data_table", id_salt))
                            .num_columns(columns.len() + usize::from(selectable))
                            .striped(true)
                            .spacing(CELL_SPACING)
                            .min_col_width(MIN_COL_WIDTH)
                            .show(ui, |ui| {
                                if selectable && render_select_all_cell(ui, all_selected) {
                                    toggle_all = true;
                                }
                                for column in columns {
                                    let direction = state.sort.direction_of(column.data_index());
                                    if render_header_cell(ui, column, direction) {
                                        clicked_sort = Some(column.data_index());
                                    }
                                }
                                ui.end_row();

                                if loading {
                                    render_loading_row(ui);
                                    ui.end_row();
                                } else if rows.is_empty() {
                                    render_empty_row(ui, &empty_text);
                                    ui.end_row();
                                } else {
                                    for (position, &index) in order.iter().enumerate() {
                                        let selected = selectable
                                            && state.selection.contains(&keys[index]);
                                        if render_data_row(
                                            ui,
                                            &rows[index],
                                            &serialized[index],
                                            columns,
                                            position + 1,
                                            selectable,
                                            selected,
                                        ) {
                                            toggled_row = Some(index);
                                        }
                                        ui.end_row();
                                    }
                                }
                            });
                    });
            })
            .response;

        let mut out = DataTableResponse {
            response,
            sort_changed: false,
            selection_changed: false,
            selected: Vec::new(),
        };

        if let Some(field) = clicked_sort {
            state.sort.cycle(field);
            out.sort_changed = true;
        }

        let selection_changed = if toggle_all {
            if all_selected {
                state.selection.clear();
            } else {
                state.selection.replace(order.iter().map(|&i| keys[i].clone()));
            }
            true
        } else if let Some(index) = toggled_row {
            state.selection.toggle(keys[index].clone());
            true
        } else {
            false
        };

        if selection_changed {
            out.selection_changed = true;
            out.selected = order
                .iter()
                .filter(|&&i| state.selection.contains(&keys[i]))
                .map(|&i| &rows[i])
                .collect();
        }

        out
    }
}

/// Display order of the rows under `sort`: a stably sorted copy of the row
/// indices, or caller order when no sort is active.
fn display_order(serialized: &[Value], sort: &SortState) -> Vec<usize> {
    match sort.active() {
        Some((field, direction)) => {
            let cells: Vec<CellValue> = serialized
                .iter()
                .map(|row| CellValue::of_field(row, field))
                .collect();
            sorted_indices(&cells, direction)
        }
        None => (0..serialized.len()).collect(),
    }
}
