//! Paginated, filterable view over a record set.
//!
//! `PaginatedFilterView` is the whole of the pure core: it owns the records,
//! the current query, the filtered subsequence and the active page. Every
//! query change recomputes the filtered view in full and resets to page 1.

use crate::model::{Record, RecordSet};
use crate::state::filter::{filter_indices, FilterQuery};
use serde::Deserialize;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use tracing::debug;

/// Records per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => panic!("page size must be non-zero"),
};

/// Number of pages needed for `len` items. Zero items need zero pages.
pub fn num_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

// ===== OutOfRangePolicy =====

/// What `select_page` does with an index outside `1..=num_pages`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Clamp to the nearest valid page (page 1 when nothing matches).
    #[default]
    Clamp,
    /// Keep the requested index and show nothing.
    Empty,
}

impl OutOfRangePolicy {
    /// Name used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            OutOfRangePolicy::Clamp => "clamp",
            OutOfRangePolicy::Empty => "empty",
        }
    }
}

impl fmt::Display for OutOfRangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown page policy '{0}' (expected 'clamp' or 'empty')")]
pub struct InvalidPolicy(pub String);

impl FromStr for OutOfRangePolicy {
    type Err = InvalidPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(OutOfRangePolicy::Clamp),
            "empty" => Ok(OutOfRangePolicy::Empty),
            _ => Err(InvalidPolicy(s.to_string())),
        }
    }
}

// ===== PageOutput =====

/// Everything the render sink needs after a query change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutput<'a> {
    /// Records on the active page, in display order.
    pub visible: Vec<&'a Record>,
    /// `1..=num_pages`; empty when nothing matches.
    pub page_labels: Vec<usize>,
    /// True when the query matched no records.
    pub is_empty: bool,
    /// True when there is more than one page worth of matches.
    pub show_controls: bool,
}

// ===== PaginatedFilterView =====

/// Pagination and search state over an immutable record set.
#[derive(Debug, Clone)]
pub struct PaginatedFilterView {
    records: RecordSet,
    query: FilterQuery,
    /// Indices into `records`, ascending.
    filtered: Vec<usize>,
    page_size: NonZeroUsize,
    active_page: usize,
    policy: OutOfRangePolicy,
}

impl PaginatedFilterView {
    /// Create a view showing page 1 of all records.
    pub fn new(records: RecordSet) -> Self {
        let filtered = (0..records.len()).collect();
        Self {
            records,
            query: FilterQuery::default(),
            filtered,
            page_size: DEFAULT_PAGE_SIZE,
            active_page: 1,
            policy: OutOfRangePolicy::default(),
        }
    }

    /// Set the page size. Resets to page 1.
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self.active_page = 1;
        self
    }

    /// Set how out-of-range page indices are handled.
    pub fn with_policy(mut self, policy: OutOfRangePolicy) -> Self {
        self.policy = policy;
        self
    }

    // ===== Operations =====

    /// Apply a new filter query.
    ///
    /// Recomputes the filtered view from scratch and resets to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) -> PageOutput<'_> {
        self.query = FilterQuery::new(query);
        self.filtered = filter_indices(&self.records, &self.query);
        self.active_page = 1;

        debug!(
            query = self.query.as_str(),
            matches = self.filtered.len(),
            "Filter applied"
        );

        self.output()
    }

    /// Select a page by its 1-based label.
    ///
    /// Indices outside `1..=num_pages` are resolved by the view's
    /// [`OutOfRangePolicy`].
    pub fn select_page(&mut self, index: usize) -> Vec<&Record> {
        self.active_page = match self.policy {
            OutOfRangePolicy::Clamp => index.clamp(1, self.num_pages().max(1)),
            OutOfRangePolicy::Empty => index,
        };
        debug!(requested = index, active = self.active_page, "Page selected");
        self.visible_records()
    }

    /// Move to the next page. Returns false when already on the last page.
    pub fn next_page(&mut self) -> bool {
        let target = self.current_in_range().map(|p| (p + 1).min(self.num_pages()));
        self.go_to(target)
    }

    /// Move to the previous page. Returns false when already on page 1.
    pub fn prev_page(&mut self) -> bool {
        let target = self.current_in_range().map(|p| p.saturating_sub(1).max(1));
        self.go_to(target)
    }

    /// Jump to page 1.
    pub fn first_page(&mut self) -> bool {
        let target = self.current_in_range().map(|_| 1);
        self.go_to(target)
    }

    /// Jump to the last page.
    pub fn last_page(&mut self) -> bool {
        let target = self.current_in_range().map(|_| self.num_pages());
        self.go_to(target)
    }

    // ===== Queries =====

    /// Current output snapshot.
    pub fn output(&self) -> PageOutput<'_> {
        PageOutput {
            visible: self.visible_records(),
            page_labels: self.page_labels(),
            is_empty: self.is_empty(),
            show_controls: self.show_page_controls(),
        }
    }

    /// Records on the active page.
    ///
    /// Empty when the filtered view is empty or the active page is out of range.
    pub fn visible_records(&self) -> Vec<&Record> {
        if self.active_page == 0 || self.active_page > self.num_pages() {
            return Vec::new();
        }
        let size = self.page_size.get();
        let start = (self.active_page - 1) * size;
        let end = (start + size).min(self.filtered.len());
        self.filtered[start..end]
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    /// Page labels `1..=num_pages`; empty when nothing matches.
    pub fn page_labels(&self) -> Vec<usize> {
        (1..=self.num_pages()).collect()
    }

    /// Pages needed for the current matches.
    pub fn num_pages(&self) -> usize {
        num_pages(self.filtered.len(), self.page_size)
    }

    /// Page controls are only shown when matches span more than one page.
    pub fn show_page_controls(&self) -> bool {
        self.filtered.len() > self.page_size.get()
    }

    /// True when the current query matched nothing.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// All matching records in display order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.filtered.iter().map(|&i| &self.records[i])
    }

    /// Number of records matching the query.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Number of records loaded.
    pub fn total_len(&self) -> usize {
        self.records.len()
    }

    /// The applied query.
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// The active 1-based page. May be out of range under [`OutOfRangePolicy::Empty`].
    pub fn active_page(&self) -> usize {
        self.active_page
    }

    /// Records per page.
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// The out-of-range policy in effect.
    pub fn policy(&self) -> OutOfRangePolicy {
        self.policy
    }

    // ===== Helpers =====

    /// Active page pulled into range, or None when there are no pages.
    fn current_in_range(&self) -> Option<usize> {
        let pages = self.num_pages();
        (pages > 0).then(|| self.active_page.clamp(1, pages))
    }

    fn go_to(&mut self, target: Option<usize>) -> bool {
        match target {
            Some(page) if page != self.active_page => {
                self.active_page = page;
                debug!(active = page, "Page changed");
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
