//! Data row rendering with the selection checkbox.

use egui::{Checkbox, Ui, WidgetInfo, WidgetType};
use gridform_states::CellValue;
use serde_json::Value;

use super::cells::{data_cell, render_value_cell};
use super::columns::Column;

/// Renders one data row. `position` is the 1-based display position used in
/// the checkbox's accessible label. Returns true when the row's checkbox was
/// toggled.
#[inline]
pub(crate) fn render_data_row<T>(
    ui: &mut Ui,
    row: &T,
    serialized: &Value,
    columns: &[Column<T>],
    position: usize,
    selectable: bool,
    selected: bool,
) -> bool {
    let mut toggled = false;

    if selectable {
        data_cell(ui, selected, |ui| {
            let mut checked = selected;
            let response = ui.add(Checkbox::without_text(&mut checked));
            response.widget_info(|| {
                WidgetInfo::selected(
                    WidgetType::Checkbox,
                    true,
                    selected,
                    format!("Select row {position}"),
                )
            });
            if response.clicked() {
                toggled = true;
            }
        });
    }

    for column in columns {
        data_cell(ui, selected, |ui| {
            if let Some(width) = column.width {
                ui.set_min_width(width);
            }
            let value = CellValue::of_field(serialized, &column.data_index);
            match &column.renderer {
                Some(renderer) => renderer(ui, &value, row),
                None => render_value_cell(ui, &value),
            }
        });
    }

    toggled
}
