//! Wire-schema DTOs for the reports backend.
//!
//! DESIGN
//! ======
//! Deserialization is lenient where the backend is loose: report ids may be
//! numbers or strings, and absent or `null` collections become empty vectors.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub use crate::table::Row;
pub use crate::table::columns::ColumnDescriptor;

/// Query parameters passed verbatim to a search endpoint.
pub type Filter = serde_json::Map<String, serde_json::Value>;

/// An authenticated user as returned by the current-user endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Permission tags granted to this user.
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub roles: Vec<String>,
}

/// A server-defined report that users can submit data against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report identifier (numeric ids are kept in their decimal form).
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Submittable fields, in form order. Empty means nothing to submit.
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub fields: Vec<ReportField>,
}

impl Report {
    pub fn is_submittable(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// One submittable field of a report form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportField {
    /// Machine name of the field.
    #[serde(default)]
    pub name: String,
    /// Human-readable label, if the backend provides one.
    #[serde(default)]
    pub label: Option<String>,
    /// Input type hint (e.g. `"text"`, `"number"`).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl ReportField {
    /// Label for display, falling back to the machine name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().filter(|l| !l.is_empty()).unwrap_or(&self.name)
    }
}

/// Response body of a submissions search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionsPage {
    /// Column descriptors for the table; empty when the backend omits them.
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub columns: Vec<ColumnDescriptor>,
    /// Submission rows.
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub data: Vec<Row>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
