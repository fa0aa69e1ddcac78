//! Pagination over an ordered collection.
//!
//! Pages are 1-based. Out-of-range requests degrade to an empty page
//! rather than erroring; [`PageState::clamp_to`] is what the view model
//! uses to keep the index inside the valid range whenever the filtered
//! collection size changes.

use serde::{Deserialize, Serialize};
use tracing::debug;

// ---------------------------------------------------------------------------
// PageState
// ---------------------------------------------------------------------------

/// The pagination state for one table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// 1-based page index.
    pub page_index: usize,
    /// Records per page, at least 1.
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index: page_index.max(1),
            page_size: page_size.max(1),
        }
    }

    /// The first page at the given size.
    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    /// Clamp the index to `[1, total_pages(total_records)]`.
    pub fn clamp_to(&mut self, total_records: usize) {
        let last = total_pages(total_records, self.page_size);
        if self.page_index > last {
            debug!(
                from = self.page_index,
                to = last,
                "clamping page index to last page"
            );
            self.page_index = last;
        }
        if self.page_index == 0 {
            self.page_index = 1;
        }
    }
}

// ---------------------------------------------------------------------------
// PageView
// ---------------------------------------------------------------------------

/// One page of records plus the page count for the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<R> {
    pub records: Vec<R>,
    pub total_pages: usize,
}

/// Page count for a collection: at least 1, even when empty.
pub fn total_pages(total_records: usize, page_size: usize) -> usize {
    total_records.div_ceil(page_size.max(1)).max(1)
}

/// Slice out the requested page.
///
/// An index past the last page yields an empty page; the caller is
/// expected to clamp beforehand, but an unclamped request must still
/// degrade gracefully.
pub fn paginate<R: Clone>(records: &[R], page: &PageState) -> PageView<R> {
    let size = page.page_size.max(1);
    let start = (page.page_index.max(1) - 1) * size;
    let end = (start + size).min(records.len());

    let slice: &[R] = if start >= records.len() {
        &[]
    } else {
        &records[start..end]
    };

    PageView {
        records: slice.to_vec(),
        total_pages: total_pages(records.len(), size),
    }
}
