//! Single-key row sorting with a nulls-last policy.
//!
//! DESIGN
//! ======
//! Only one column is ever the sort key. Selecting a different column discards
//! the previous order entirely. Null and missing values sort after every
//! present value in both directions, and equal values keep their input order.

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

use std::cmp::Ordering;

use serde_json::Value;

use super::Row;
use super::columns::ColumnModel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Value for the `aria-sort` header attribute.
    pub fn aria(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Active sort key and direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self { key: key.into(), direction: SortDirection::Ascending }
    }
}

/// Sort applied before the user touches a header: ascending on `key` when
/// that column exists and is sortable, otherwise none.
pub fn initial_sort(model: &ColumnModel, key: Option<&str>) -> Option<SortState> {
    let key = key?;
    model.is_sortable(key).then(|| SortState::ascending(key))
}

/// Header-click transition. Non-sortable or unknown columns leave `current`
/// untouched; the active column flips direction; any other sortable column
/// becomes the sole key, ascending.
pub fn toggle_sort(current: Option<&SortState>, model: &ColumnModel, key: &str) -> Option<SortState> {
    if !model.is_sortable(key) {
        return current.cloned();
    }
    match current {
        Some(active) if active.key == key => {
            Some(SortState { key: active.key.clone(), direction: active.direction.toggled() })
        }
        _ => Some(SortState::ascending(key)),
    }
}

/// Stable sort of `rows` by `sort`; `None` returns the input order.
pub fn sort_rows(rows: &[Row], sort: Option<&SortState>) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    if let Some(sort) = sort {
        sorted.sort_by(|a, b| compare_values(a.get(&sort.key), b.get(&sort.key), sort.direction));
    }
    sorted
}

/// Compare two cell values for `direction`, keeping nulls last either way.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = compare_present(a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.to_lowercase().cmp(&y.to_lowercase()).then_with(|| x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)).then_with(|| a.to_string().cmp(&b.to_string())),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
