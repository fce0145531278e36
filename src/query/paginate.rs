//! # Pagination
//!
//! Page arithmetic over an ordered sequence of rows. Pages are 1-based; a
//! page past the end is valid and simply holds no items.

use serde::Serialize;

/// Default page when the client sends none
pub const DEFAULT_PAGE: usize = 1;

/// Default page size when the client sends none
pub const DEFAULT_PER_PAGE: usize = 10;

/// A validated pagination request. Both fields are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    page: usize,
    per_page: usize,
}

impl PageSpec {
    /// Returns `None` if either value is zero.
    pub fn new(page: usize, per_page: usize) -> Option<Self> {
        if page == 0 || per_page == 0 {
            return None;
        }
        Some(Self { page, per_page })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: Vec<T>,
}

/// Slice `rows` according to `spec`.
///
/// `total_items` is always the full row count and `total_pages` its
/// ceiling division by `per_page` (0 for no rows). The requested page and
/// page size are echoed back even when the page is empty.
pub fn paginate<T: Clone>(rows: &[T], spec: &PageSpec) -> PageResult<T> {
    let total_items = rows.len();
    let total_pages = total_items.div_ceil(spec.per_page);

    let start = spec.offset();
    let items = if start >= total_items {
        Vec::new()
    } else {
        let end = start.saturating_add(spec.per_page).min(total_items);
        rows[start..end].to_vec()
    };

    PageResult {
        page: spec.page,
        per_page: spec.per_page,
        total_pages,
        total_items,
        items,
    }
}
