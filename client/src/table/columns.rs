//! Column descriptors and the ordered column model.
//!
//! DESIGN
//! ======
//! Column keys are not validated against row shape. A key missing from a row
//! renders as an empty cell and sorts as null.

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Row;

/// Metadata for one displayable (and possibly sortable) row field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Row field this column reads. Some backends send it as `name`.
    #[serde(alias = "name")]
    pub key: String,
    /// Header text.
    #[serde(default)]
    pub label: String,
    /// Whether clicking the header sorts by this column.
    #[serde(default = "default_sortable")]
    pub sortable: bool,
}

fn default_sortable() -> bool {
    true
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, sortable: bool) -> Self {
        Self { key: key.into(), label: label.into(), sortable }
    }

    /// Header text, falling back to the key when the server sent no label.
    pub fn header(&self) -> &str {
        if self.label.is_empty() { &self.key } else { &self.label }
    }
}

/// Ordered column set; insertion order is left-to-right display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnModel {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnModel {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn find(&self, key: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// `true` only for a known column flagged sortable.
    pub fn is_sortable(&self, key: &str) -> bool {
        self.find(key).is_some_and(|c| c.sortable)
    }

    /// Key of the left-most column, used as the card title on narrow screens.
    pub fn primary_key(&self) -> Option<&str> {
        self.columns.first().map(|c| c.key.as_str())
    }
}

/// Display text for `row[key]`. Missing keys and `null` yield an empty string.
pub fn cell_text(row: &Row, key: &str) -> String {
    match row.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => (if *b { "Yes" } else { "No" }).to_owned(),
        Some(other) => other.to_string(),
    }
}
