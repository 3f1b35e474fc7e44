//! Page descriptor computation for paged listings.
//!
//! [`Pager`] turns `(total_items, current_page, page_size)` into everything a
//! client needs to render one page and its navigation bar:
//!
//! - `total_pages = ceil(total_items / page_size)`
//! - the requested page, snapped into `[1, max(1, total_pages)]`
//! - a window of at most `max_pages` page numbers around the current page
//! - zero-based inclusive slice bounds into the full item sequence
//!
//! The computation is pure: identical inputs always yield identical pagers.

use std::ops::Range;

use serde::Serialize;
use utoipa::ToSchema;

/// Width of the visible page-number window used by the gallery.
pub const DEFAULT_MAX_PAGES: usize = 10;

/// Caller contract violations rejected by [`Pager::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PagerError {
    /// `page_size` was zero.
    #[error("page size must be positive")]
    ZeroPageSize,
    /// `max_pages` was zero.
    #[error("page window must hold at least one page")]
    ZeroWindow,
}

/// Computed pagination descriptor.
///
/// For an empty collection the pager has `total_pages == 0`,
/// `current_page == 1`, an empty `pages` list (`start_page == 1`,
/// `end_page == 0`) and `end_index == None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pager {
    /// Number of items across all pages.
    pub total_items: usize,
    /// 1-based page this descriptor points at, after snapping.
    pub current_page: usize,
    /// Items per page.
    pub page_size: usize,
    /// `ceil(total_items / page_size)`.
    pub total_pages: usize,
    /// First page number in the visible window.
    pub start_page: usize,
    /// Last page number in the visible window.
    pub end_page: usize,
    /// Zero-based index of the first item on the current page.
    pub start_index: usize,
    /// Zero-based index of the last item on the current page, inclusive.
    /// `None` when there are no items.
    pub end_index: Option<usize>,
    /// Page numbers from `start_page` to `end_page`, inclusive.
    pub pages: Vec<usize>,
}

impl Pager {
    /// Computes a pager with the default window of [`DEFAULT_MAX_PAGES`].
    ///
    /// `current_page` is taken as the client sent it: values below 1 snap
    /// to the first page and values past the end snap to the last page.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::ZeroPageSize`] if `page_size` is zero.
    pub fn new(total_items: usize, current_page: i64, page_size: usize) -> Result<Self, PagerError> {
        Self::with_max_pages(total_items, current_page, page_size, DEFAULT_MAX_PAGES)
    }

    /// Computes a pager whose page-number window holds at most `max_pages`
    /// entries.
    ///
    /// The window keeps `(max_pages - 1) / 2` pages before the current page
    /// and fills the rest after it, sliding instead of shrinking when it
    /// would run past either end.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::ZeroPageSize`] if `page_size` is zero and
    /// [`PagerError::ZeroWindow`] if `max_pages` is zero.
    pub fn with_max_pages(
        total_items: usize,
        current_page: i64,
        page_size: usize,
        max_pages: usize,
    ) -> Result<Self, PagerError> {
        if page_size == 0 {
            return Err(PagerError::ZeroPageSize);
        }
        if max_pages == 0 {
            return Err(PagerError::ZeroWindow);
        }

        let total_pages = total_items.div_ceil(page_size);
        let current_page = usize::try_from(current_page.max(1))
            .unwrap_or(usize::MAX)
            .min(total_pages.max(1));

        let (start_page, end_page) = visible_window(current_page, total_pages, max_pages);

        let start_index = (current_page - 1).saturating_mul(page_size);
        let end_index = total_items
            .checked_sub(1)
            .map(|last| start_index.saturating_add(page_size - 1).min(last));

        Ok(Self {
            total_items,
            current_page,
            page_size,
            total_pages,
            start_page,
            end_page,
            start_index,
            end_index,
            pages: (start_page..=end_page).collect(),
        })
    }

    /// Returns `true` when there is nothing to show.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Half-open range of the current page's items within the full
    /// sequence. Empty when there are no items.
    #[must_use]
    pub fn slice_range(&self) -> Range<usize> {
        match self.end_index {
            Some(end) => self.start_index..end.saturating_add(1),
            None => self.start_index..self.start_index,
        }
    }

    /// Number of items on the current page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slice_range().len()
    }
}

/// Returns `(start_page, end_page)` of the visible window.
fn visible_window(current_page: usize, total_pages: usize, max_pages: usize) -> (usize, usize) {
    if total_pages == 0 {
        return (1, 0);
    }
    if total_pages <= max_pages {
        return (1, total_pages);
    }
    let before = (max_pages - 1) / 2;
    let last_start = total_pages - max_pages + 1;
    let start = current_page.saturating_sub(before).clamp(1, last_start);
    (start, start + max_pages - 1)
}
