//! Row selection tracking for tabular views.

use std::collections::HashSet;

use log::debug;

use crate::identity::RowKey;

/// The set of currently selected row identities.
///
/// Starts empty, is only mutated by user interaction, and tracks keys rather
/// than positions so a selection survives re-sorting.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    keys: HashSet<RowKey>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips one row's membership. Returns whether the row is now selected.
    pub fn toggle(&mut self, key: RowKey) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn contains(&self, key: &RowKey) -> bool {
        self.keys.contains(key)
    }

    /// True when every key in `keys` is selected and there is at least one.
    pub fn all_selected<'a>(&self, keys: impl IntoIterator<Item = &'a RowKey>) -> bool {
        let mut any = false;
        for key in keys {
            any = true;
            if !self.keys.contains(key) {
                return false;
            }
        }
        any
    }

    /// Replaces the whole selection. Select-all replaces rather than merges,
    /// so anything not in `keys` is dropped.
    pub fn replace(&mut self, keys: impl IntoIterator<Item = RowKey>) {
        self.keys = keys.into_iter().collect();
        debug!("selection replaced: {} rows", self.keys.len());
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(id: i64) -> RowKey {
        RowKey::for_row(&json!({ "id": id }), "id")
    }

    #[test]
    fn toggling_twice_restores_the_prior_state() {
        let mut selection = SelectionState::new();

        assert!(selection.toggle(key(1)));
        assert!(selection.contains(&key(1)));

        assert!(!selection.toggle(key(1)));
        assert!(selection.is_empty());
    }

    #[test]
    fn all_selected_is_false_for_no_keys() {
        let selection = SelectionState::new();
        assert!(!selection.all_selected(std::iter::empty::<&RowKey>()));
    }

    #[test]
    fn all_selected_requires_every_key() {
        let mut selection = SelectionState::new();
        selection.toggle(key(1));

        let keys = [key(1), key(2)];
        assert!(!selection.all_selected(keys.iter()));

        selection.toggle(key(2));
        assert!(selection.all_selected(keys.iter()));
    }

    #[test]
    fn replace_drops_everything_not_supplied() {
        let mut selection = SelectionState::new();
        selection.toggle(key(1));
        selection.toggle(key(2));

        selection.replace([key(3)]);

        assert!(!selection.contains(&key(1)));
        assert!(!selection.contains(&key(2)));
        assert!(selection.contains(&key(3)));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn clear_empties_the_selection() {
        let mut selection = SelectionState::new();
        selection.toggle(key(1));

        selection.clear();
        assert!(selection.is_empty());
    }
}
