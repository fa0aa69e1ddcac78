//! The table view model: the composition root owning filter, sort, and
//! page state for one table.
//!
//! [`TableView`] is purely synchronous. Each transition mutates the
//! declarative state; [`TableView::render`] recomputes the derived view
//! (filter, sort, priority re-order, paginate, aggregate) from whatever
//! record snapshot the caller supplies. The view never keeps a copy of
//! the records beyond the render call, so external mutations show up on
//! the next render of a re-queried collection.
//!
//! # Example
//!
//! ```rust
//! use finops_view::models::Invoice;
//! use finops_view::TableView;
//!
//! let invoices: Vec<Invoice> = Vec::new();
//! let mut view = TableView::<Invoice>::builder().page_size(20).build();
//!
//! view.select("status", "Approved");
//! view.set_sort("total");
//!
//! let snapshot = view.render(&invoices);
//! assert_eq!(snapshot.current_page, 1);
//! assert_eq!(snapshot.total_pages, 1);
//! ```

use std::marker::PhantomData;

use crate::aggregate::{self, AggregateResult};
use crate::filter::{self, DimensionFilter, FilterBadge, FilterSpec};
use crate::paginate::{self, PageState};
use crate::priority;
use crate::record::TableRecord;
use crate::sort::{self, SortSpec};

const DEFAULT_PAGE_SIZE: usize = 20;

// ---------------------------------------------------------------------------
// TableViewBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`TableView`].
pub struct TableViewBuilder<R> {
    page_size: usize,
    priority: bool,
    sort: SortSpec,
    _record: PhantomData<fn() -> R>,
}

impl<R> Default for TableViewBuilder<R> {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            priority: true,
            sort: SortSpec::default(),
            _record: PhantomData,
        }
    }
}

impl<R: TableRecord + Clone> TableViewBuilder<R> {
    /// Records per page. Defaults to 20; values below 1 are raised to 1.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Enable or disable the post-sort priority stage for this view.
    ///
    /// Only meaningful for record types with a
    /// [`priority_rule`](TableRecord::priority_rule); defaults to enabled.
    pub fn priority(mut self, enabled: bool) -> Self {
        self.priority = enabled;
        self
    }

    /// Start with an initial sort instead of insertion order.
    pub fn initial_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    pub fn build(self) -> TableView<R> {
        TableView {
            filter: FilterSpec::new(),
            sort: self.sort,
            page: PageState::first(self.page_size),
            priority: self.priority,
            _record: PhantomData,
        }
    }
}

// ---------------------------------------------------------------------------
// TableView
// ---------------------------------------------------------------------------

/// View-model state for one table of `R` records.
///
/// Owns the [`FilterSpec`], [`SortSpec`], and [`PageState`] exclusively;
/// the record collection itself is owned by the caller and passed to
/// [`render`](Self::render) per recomputation.
pub struct TableView<R> {
    filter: FilterSpec,
    sort: SortSpec,
    page: PageState,
    priority: bool,
    _record: PhantomData<fn() -> R>,
}

impl<R: TableRecord + Clone> TableView<R> {
    /// Create a builder for configuring the view.
    pub fn builder() -> TableViewBuilder<R> {
        TableViewBuilder::default()
    }

    /// A view with the given page size and otherwise default settings.
    pub fn new(page_size: usize) -> Self {
        Self::builder().page_size(page_size).build()
    }

    // -- State inspection --------------------------------------------------

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    // -- Transitions -------------------------------------------------------
    //
    // Every filter change returns the view to page 1 so a shrinking
    // result set cannot leave the user stranded past the last page.

    /// Replace one dimension's constraint.
    pub fn set_filter(&mut self, dimension: &str, filter: DimensionFilter) {
        self.filter.set(dimension, filter);
        self.page.page_index = 1;
    }

    /// Single-select a dimension value; `"All"` clears the dimension.
    pub fn select(&mut self, dimension: &str, value: impl Into<String>) {
        self.set_filter(
            dimension,
            DimensionFilter::Equals {
                value: value.into(),
            },
        );
    }

    /// Multi-select dimension values; an empty iterator clears the dimension.
    pub fn select_many<I, S>(&mut self, dimension: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_filter(
            dimension,
            DimensionFilter::AnyOf {
                values: values.into_iter().map(Into::into).collect(),
            },
        );
    }

    /// Constrain a range dimension with inclusive, optional bounds.
    pub fn set_range(&mut self, dimension: &str, from: Option<&str>, to: Option<&str>) {
        self.set_filter(
            dimension,
            DimensionFilter::Range {
                from: from.map(str::to_string),
                to: to.map(str::to_string),
            },
        );
    }

    /// Set the free-text search; an empty string clears it.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.set_search(text);
        self.page.page_index = 1;
    }

    /// Drop one dimension's constraint.
    pub fn clear_filter(&mut self, dimension: &str) {
        self.filter.remove(dimension);
        self.page.page_index = 1;
    }

    /// Restore the identity filter and return to page 1.
    ///
    /// The sort is deliberately left alone.
    pub fn reset_filters(&mut self) {
        self.filter = FilterSpec::new();
        self.page.page_index = 1;
    }

    /// Header-click sort: toggles direction on the current field, resets
    /// to ascending on a new field.
    pub fn set_sort(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    /// Jump to a page. Indexes below 1 become 1; indexes past the last
    /// page are clamped at the next render.
    pub fn set_page(&mut self, page_index: usize) {
        self.page.page_index = page_index.max(1);
    }

    // -- Recomputation -----------------------------------------------------

    /// Recompute the derived view from a record snapshot.
    ///
    /// Pipeline: filter, sort, priority re-order, clamp the page index to
    /// the filtered size, aggregate (pre-pagination), paginate.
    pub fn render(&mut self, records: &[R]) -> ViewSnapshot<R> {
        let rows = filter::apply(records, &self.filter);
        let rows = sort::apply(&rows, &self.sort);
        let rows = match R::priority_rule() {
            Some(ref rule) if self.priority => priority::apply(&rows, rule),
            _ => rows,
        };

        self.page.clamp_to(rows.len());

        let aggregate = aggregate::summarize(&rows);
        let page = paginate::paginate(&rows, &self.page);

        ViewSnapshot {
            visible_records: page.records,
            current_page: self.page.page_index,
            total_pages: page.total_pages,
            total_records: rows.len(),
            aggregate,
            active_filters: self.filter.badges(),
        }
    }
}

// ---------------------------------------------------------------------------
// ViewSnapshot
// ---------------------------------------------------------------------------

/// Everything the rendering layer needs to draw one table state: the
/// visible rows, pagination metadata, the footer aggregate over all
/// matching records, and the removable filter-chip descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot<R> {
    pub visible_records: Vec<R>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Count of all matching records, across every page.
    pub total_records: usize,
    pub aggregate: AggregateResult,
    pub active_filters: Vec<FilterBadge>,
}
