//! Cell values and the ordering used by sortable columns.

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

use crate::sort::SortDirection;

/// A single cell's value, as read out of a serialized row.
///
/// Rows are viewed through their Serde representation, so a cell is whatever
/// JSON value the named field serialized to. An absent field and an explicit
/// `null` are both [`CellValue::Missing`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Reads `field` out of a serialized row.
    pub fn of_field(row: &Value, field: &str) -> Self {
        row.get(field).map_or(Self::Missing, Self::from_json)
    }

    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    Self::Missing
                }
            }
            Value::String(s) => Self::Text(s.clone()),
            // Nested values display (and compare) as their JSON text.
            other => Self::Text(other.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Compares two cells under an active sort.
    ///
    /// Missing values order before all present values regardless of
    /// direction; the direction only flips present-to-present comparisons.
    /// Two numbers compare numerically, every other pairing compares by
    /// string representation.
    pub fn compare(&self, other: &Self, direction: SortDirection) -> Ordering {
        let ordering = match (self.is_missing(), other.is_missing()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => match (self, other) {
                (Self::Int(a), Self::Int(b)) => a.cmp(b),
                _ => match (self.as_number(), other.as_number()) {
                    (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                    _ => compare_text(&self.to_string(), &other.to_string()),
                },
            },
        };

        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Case-insensitive first, so "apple" and "Banana" interleave the way a
/// locale-aware comparison would; codepoint order as the tiebreak keeps the
/// ordering total and deterministic.
fn compare_text(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        folded => folded,
    }
}

/// The display order of a column's cells: a stably sorted copy of the row
/// indices. The rows themselves are never moved.
pub fn sorted_indices(cells: &[CellValue], direction: SortDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cells.len()).collect();
    order.sort_by(|&a, &b| cells[a].compare(&cells[b], direction));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_sorts_first_in_both_directions() {
        let missing = CellValue::Missing;
        let present = CellValue::Int(1);

        assert_eq!(
            missing.compare(&present, SortDirection::Ascending),
            Ordering::Less
        );
        assert_eq!(
            missing.compare(&present, SortDirection::Descending),
            Ordering::Less,
            "direction must not move missing values to the end"
        );
        assert_eq!(
            present.compare(&missing, SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn numbers_compare_numerically_across_int_and_float() {
        let two = CellValue::Int(2);
        let ten = CellValue::Float(10.5);

        assert_eq!(two.compare(&ten, SortDirection::Ascending), Ordering::Less);
        assert_eq!(
            two.compare(&ten, SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn text_comparison_is_case_insensitive() {
        let apple = CellValue::Text("apple".to_owned());
        let banana = CellValue::Text("Banana".to_owned());

        assert_eq!(
            apple.compare(&banana, SortDirection::Ascending),
            Ordering::Less
        );
    }

    #[test]
    fn mixed_types_fall_back_to_string_comparison() {
        // "30" < "abc" by string, even though one side is numeric.
        let number = CellValue::Int(30);
        let text = CellValue::Text("abc".to_owned());

        assert_eq!(
            number.compare(&text, SortDirection::Ascending),
            Ordering::Less
        );
    }

    #[test]
    fn json_null_and_absent_field_are_both_missing() {
        let row = json!({ "a": null, "b": 1 });

        assert!(CellValue::of_field(&row, "a").is_missing());
        assert!(CellValue::of_field(&row, "missing").is_missing());
        assert_eq!(CellValue::of_field(&row, "b"), CellValue::Int(1));
    }

    #[test]
    fn descending_reverses_ascending_except_the_missing_group() {
        let cells = vec![
            CellValue::Int(2),
            CellValue::Missing,
            CellValue::Int(1),
            CellValue::Missing,
        ];

        let ascending = sorted_indices(&cells, SortDirection::Ascending);
        let descending = sorted_indices(&cells, SortDirection::Descending);

        // Missing cells stay grouped first, in their original relative order.
        assert_eq!(ascending, vec![1, 3, 2, 0]);
        assert_eq!(descending, vec![1, 3, 0, 2]);

        // The present tail reverses between the two directions.
        let asc_tail: Vec<usize> = ascending[2..].to_vec();
        let desc_tail: Vec<usize> = descending[2..].iter().rev().copied().collect();
        assert_eq!(asc_tail, desc_tail);
    }

    #[test]
    fn sort_is_stable_for_equal_cells() {
        let cells = vec![
            CellValue::Text("same".to_owned()),
            CellValue::Text("same".to_owned()),
            CellValue::Text("earlier".to_owned()),
        ];

        let order = sorted_indices(&cells, SortDirection::Ascending);
        assert_eq!(order, vec![2, 0, 1], "ties keep their original order");
    }
}
