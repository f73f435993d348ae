//! Column sort state machine for tabular views.

use log::debug;

/// Direction of an active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Tracks which column, if any, is actively sorted and in which direction.
///
/// At most one column is active at a time. Repeated activations of the same
/// column cycle ascending, descending, then back to unsorted; activating a
/// different column always restarts at ascending and drops the previous
/// column's sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(String, SortDirection)>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the state machine for one activation of `field`.
    pub fn cycle(&mut self, field: &str) {
        let next = match &self.active {
            Some((current, SortDirection::Ascending)) if current == field => {
                Some((field.to_owned(), SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == field => None,
            _ => Some((field.to_owned(), SortDirection::Ascending)),
        };
        debug!("sort cycled on {field:?}: {:?} -> {next:?}", self.active);
        self.active = next;
    }

    /// The active field and direction, if a sort is in effect.
    pub fn active(&self) -> Option<(&str, SortDirection)> {
        self.active
            .as_ref()
            .map(|(field, direction)| (field.as_str(), *direction))
    }

    /// The direction `field` is sorted in, if it is the active column.
    pub fn direction_of(&self, field: &str) -> Option<SortDirection> {
        match &self.active {
            Some((current, direction)) if current == field => Some(*direction),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
