//! Shared sort + paginate step feeding both table layouts.

#[cfg(test)]
#[path = "prepare_test.rs"]
mod prepare_test;

use super::Row;
use super::paging::Pagination;
use super::sort::{SortState, sort_rows};

/// Which presentation adapter renders the prepared rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Wide viewport: sortable headers and a pagination footer.
    #[default]
    Table,
    /// Narrow viewport: one card per row, all rows, no pagination.
    List,
}

/// Rows ready for rendering plus the paging facts the footer needs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreparedRows {
    /// Rows to render, in display order.
    pub rows: Vec<Row>,
    /// Row count before pagination.
    pub total: usize,
    /// Clamped page index (always 0 for the list layout).
    pub page: usize,
    /// `max(1, ceil(total / page_size))` for the table layout, 1 for the list.
    pub page_count: usize,
}

impl PreparedRows {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Pagination controls are only rendered for a non-empty table layout.
    pub fn shows_pagination(&self, layout: Layout) -> bool {
        layout == Layout::Table && !self.is_empty()
    }
}

/// What the tabular view renders in place of its body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewBody {
    /// Placeholder; takes precedence over any rows or empty notice.
    Loading,
    /// Empty-state notice; no table shell and no pagination controls.
    Empty,
    Table { pagination: bool },
    List,
}

pub fn body_for(loading: bool, prepared: &PreparedRows, layout: Layout) -> ViewBody {
    if loading {
        return ViewBody::Loading;
    }
    if prepared.is_empty() {
        return ViewBody::Empty;
    }
    match layout {
        Layout::Table => ViewBody::Table { pagination: prepared.shows_pagination(layout) },
        Layout::List => ViewBody::List,
    }
}

/// Sort `rows`, then paginate when `layout` is [`Layout::Table`].
pub fn prepare_rows(rows: &[Row], sort: Option<&SortState>, paging: Pagination, layout: Layout) -> PreparedRows {
    let sorted = sort_rows(rows, sort);
    let total = sorted.len();
    match layout {
        Layout::Table => PreparedRows {
            rows: paging.slice(&sorted).to_vec(),
            total,
            page: paging.page(total),
            page_count: paging.page_count(total),
        },
        Layout::List => PreparedRows { rows: sorted, total, page: 0, page_count: 1 },
    }
}
