//! Cell chrome and default cell rendering.

use egui::{Color32, Frame, InnerResponse, Margin, Ui};
use gridform_states::CellValue;

/// Border color for the table frame (subtle gray).
pub(crate) const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color (light gray).
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Header cell with background fill.
#[inline]
pub(crate) fn header_cell<R>(
    ui: &mut Ui,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Data cell with padding; cells of a selected row get a tint.
#[inline]
pub(crate) fn data_cell<R>(
    ui: &mut Ui,
    selected: bool,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    let mut frame = Frame::NONE.inner_margin(Margin::symmetric(8, 6));
    if selected {
        frame = frame.fill(ui.visuals().selection.bg_fill.gamma_multiply(0.2));
    }
    frame.show(ui, add_contents)
}

/// Default cell content: the value's string conversion.
#[inline]
pub(crate) fn render_value_cell(ui: &mut Ui, value: &CellValue) {
    ui.label(value.to_string());
}

/// The single placeholder row shown while loading, regardless of how many
/// rows the collection holds.
#[inline]
pub(crate) fn render_loading_row(ui: &mut Ui) {
    data_cell(ui, false, |ui| {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading...");
        });
    });
}

/// The single placeholder row for an empty collection.
#[inline]
pub(crate) fn render_empty_row(ui: &mut Ui, empty_text: &str) {
    data_cell(ui, false, |ui| {
        ui.label(empty_text);
    });
}
