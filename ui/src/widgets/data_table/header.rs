//! Table header rendering with sort indicators.

use egui::{Button, Checkbox, RichText, Ui, WidgetInfo, WidgetType};
use gridform_states::SortDirection;

use super::cells::header_cell;
use super::columns::Column;

/// Neutral / up / down indicator shown next to a sortable title.
fn sort_glyph(direction: Option<SortDirection>) -> &'static str {
    match direction {
        None => "↕",
        Some(SortDirection::Ascending) => "▲",
        Some(SortDirection::Descending) => "▼",
    }
}

/// Sort state as exposed to assistive technology.
fn sort_description(direction: Option<SortDirection>) -> &'static str {
    match direction {
        None => "not sorted",
        Some(SortDirection::Ascending) => "sorted ascending",
        Some(SortDirection::Descending) => "sorted descending",
    }
}

/// Renders one header cell. Returns true when a sortable header was clicked.
#[inline]
pub(crate) fn render_header_cell<T>(
    ui: &mut Ui,
    column: &Column<T>,
    direction: Option<SortDirection>,
) -> bool {
    header_cell(ui, |ui| {
        if let Some(width) = column.width {
            ui.set_min_width(width);
        }
        if column.sortable {
            // Salted with the column key so equally titled columns stay
            // distinct.
            ui.push_id(column.key(), |ui| {
                let text =
                    RichText::new(format!("{} {}", column.title, sort_glyph(direction))).strong();
                let response = ui.add(Button::new(text).frame(false));
                response.widget_info(|| {
                    WidgetInfo::labeled(
                        WidgetType::Button,
                        true,
                        format!("{}, {}", column.title, sort_description(direction)),
                    )
                });
                response.clicked()
            })
            .inner
        } else {
            ui.strong(&column.title);
            false
        }
    })
    .inner
}

/// Renders the select-all checkbox. Returns true when it was toggled.
#[inline]
pub(crate) fn render_select_all_cell(ui: &mut Ui, all_selected: bool) -> bool {
    header_cell(ui, |ui| {
        let mut checked = all_selected;
        let response = ui.add(Checkbox::without_text(&mut checked));
        response.widget_info(|| {
            WidgetInfo::selected(WidgetType::Checkbox, true, all_selected, "Select all rows")
        });
        response.clicked()
    })
    .inner
}
