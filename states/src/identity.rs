//! Row identity keys for selection tracking.

use serde_json::Value;

/// The identity of one row within a selection set.
///
/// Keys canonicalize through the row's JSON form, so the numeric id `1` and
/// the string id `"1"` stay distinct while two structurally equal rows
/// produce equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey(String);

impl RowKey {
    /// Derives the key for a serialized row: the primary-key field when it
    /// is present and non-null, otherwise the whole row's JSON text.
    ///
    /// The whole-row fallback is knowingly collision-prone: rows with
    /// identical content and no primary key collapse to a single identity.
    pub fn for_row(row: &Value, primary_key: &str) -> Self {
        match row.get(primary_key) {
            Some(id) if !id.is_null() => Self(id.to_string()),
            _ => Self(row.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
