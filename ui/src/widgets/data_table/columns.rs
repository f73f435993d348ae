//! Column descriptors for the data table.

use egui::Ui;
use gridform_states::CellValue;

/// Minimum width applied to every column.
pub(crate) const MIN_COL_WIDTH: f32 = 60.0;
/// Horizontal / vertical spacing between grid cells. Vertical spacing is
/// zero; the cell frames carry their own padding.
pub(crate) const CELL_SPACING: [f32; 2] = [16.0, 0.0];

/// Renders one cell in place of the default string conversion. Receives the
/// cell's value and the whole row.
pub type CellRenderer<T> = Box<dyn Fn(&mut Ui, &CellValue, &T)>;

/// Describes one displayed column.
pub struct Column<T> {
    pub(crate) title: String,
    pub(crate) data_index: String,
    pub(crate) sortable: bool,
    pub(crate) width: Option<f32>,
    pub(crate) renderer: Option<CellRenderer<T>>,
    key: String,
}

impl<T> Column<T> {
    /// `key` must be unique within a column set; it salts the ids of the
    /// column's widgets. `data_index` names the serialized row field the
    /// column reads; a field that does not exist on the row type renders
    /// (and sorts) as missing.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        data_index: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            data_index: data_index.into(),
            sortable: false,
            width: None,
            renderer: None,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Fixed minimum width for this column instead of the shared default.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Installs a custom cell renderer.
    pub fn render(mut self, renderer: impl Fn(&mut Ui, &CellValue, &T) + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn data_index(&self) -> &str {
        &self.data_index
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }
}
