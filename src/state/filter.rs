//! Filter query and matching.

use crate::model::{Record, RecordSet};

/// Case-insensitive substring query over a record's name and email.
///
/// The raw text is kept exactly as typed; only the comparison is folded.
/// An empty query matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    raw: String,
    folded: String,
}

impl FilterQuery {
    /// Build a query from raw input. Matching ignores case.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// The query as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// An empty query matches every record.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// True when the name or email contains the query, ignoring case.
    pub fn matches(&self, record: &Record) -> bool {
        record.matches_folded(&self.folded)
    }
}

/// Indices of all records matching `query`, in record-set order.
pub fn filter_indices(records: &RecordSet, query: &FilterQuery) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| query.matches(record))
        .map(|(index, _)| index)
        .collect()
}
