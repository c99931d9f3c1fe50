//! Presentation-independent table model: columns, sorting, and pagination.
//!
//! ARCHITECTURE
//! ============
//! `prepare::prepare_rows` is the single data-preparation step. Both the
//! desktop table and the mobile card list render its output, so the two
//! layouts can never disagree about which rows exist or in which order.

pub mod columns;
pub mod paging;
pub mod prepare;
pub mod sort;

/// One server-supplied record: column key to renderable JSON value.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Notice rendered in place of the table when there are no rows.
pub const EMPTY_TABLE_NOTICE: &str = "No data available";
