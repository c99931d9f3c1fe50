//! Client-side pagination state.

#[cfg(test)]
#[path = "paging_test.rs"]
mod paging_test;

use std::ops::Range;

use crate::config::{DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS};

/// Current page index and page size. The page index is only meaningful
/// relative to a row count; every accessor that takes `total` clamps it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

impl Pagination {
    /// A zero page size is treated as one row per page.
    pub fn new(page_size: usize) -> Self {
        Self { page: 0, page_size: page_size.max(1) }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `max(1, ceil(total / page_size))`.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Page index clamped to `[0, page_count - 1]`.
    pub fn page(&self, total: usize) -> usize {
        self.page.min(self.page_count(total) - 1)
    }

    #[must_use]
    pub fn go_to(self, page: usize, total: usize) -> Self {
        Self { page: page.min(self.page_count(total) - 1), ..self }
    }

    #[must_use]
    pub fn next(self, total: usize) -> Self {
        self.go_to(self.page(total).saturating_add(1), total)
    }

    #[must_use]
    pub fn prev(self, total: usize) -> Self {
        self.go_to(self.page(total).saturating_sub(1), total)
    }

    /// New page size; always returns to the first page.
    #[must_use]
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self::new(page_size)
    }

    pub fn has_prev(&self, total: usize) -> bool {
        self.page(total) > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page(total) + 1 < self.page_count(total)
    }

    /// Index range of the visible page within `total` rows.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page(total) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// Footer text such as `"11-20 of 42"`.
    pub fn label(&self, total: usize) -> String {
        let range = self.range(total);
        if range.is_empty() {
            return format!("0-0 of {total}");
        }
        format!("{}-{} of {total}", range.start + 1, range.end)
    }
}

/// Page sizes for the footer selector, including `initial` when it is not one
/// of the standard choices.
pub fn page_size_options(initial: usize) -> Vec<usize> {
    let initial = initial.max(1);
    let mut options = ROWS_PER_PAGE_OPTIONS.to_vec();
    if !options.contains(&initial) {
        options.push(initial);
        options.sort_unstable();
    }
    options
}
