//! Student record types.
//!
//! Records are immutable once loaded. The RecordSet keeps them in source
//! order, which is the canonical display order.

use chrono::NaiveDate;
use std::fmt;
use std::ops::Index;

// ===== RecordId =====

/// Opaque record identifier.
/// NEVER export the raw constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

/// Error returned when an identifier is empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Record id must not be empty")]
pub struct InvalidRecordId;

impl RecordId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecordId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidRecordId)
        } else {
            Ok(Self(s))
        }
    }

    /// Synthesized id for records that carry none, from their 1-based position.
    pub fn from_position(position: usize) -> Self {
        Self(format!("#{}", position))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Record =====

/// One student entry.
///
/// `name` and `email` are the searchable fields. Their lowercased forms are
/// computed once at construction so filtering never re-allocates per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    name: String,
    email: String,
    joined: Option<NaiveDate>,
    avatar: Option<String>,
    name_folded: String,
    email_folded: String,
}

impl Record {
    /// Create a record with no join date or avatar.
    pub fn new(id: RecordId, name: impl Into<String>, email: impl Into<String>) -> Self {
        let name = name.into();
        let email = email.into();
        Self {
            name_folded: name.to_lowercase(),
            email_folded: email.to_lowercase(),
            id,
            name,
            email,
            joined: None,
            avatar: None,
        }
    }

    /// Attach the join date.
    pub fn with_joined(mut self, joined: NaiveDate) -> Self {
        self.joined = Some(joined);
        self
    }

    /// Attach the avatar URL.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Record identifier.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Join date, if the input had one.
    pub fn joined(&self) -> Option<NaiveDate> {
        self.joined
    }

    /// Avatar URL, if any.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Case-insensitive substring match against name or email.
    ///
    /// `needle_folded` must already be lowercased. An empty needle matches.
    pub fn matches_folded(&self, needle_folded: &str) -> bool {
        self.name_folded.contains(needle_folded) || self.email_folded.contains(needle_folded)
    }
}

// ===== RecordSet =====

/// Ordered, immutable collection of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Wrap records in input order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index` (0-based).
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterate in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for RecordSet {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: &str) -> Record {
        Record::new(RecordId::new("r").unwrap(), name, email)
    }

    #[test]
    fn record_id_rejects_empty() {
        assert_eq!(RecordId::new(""), Err(InvalidRecordId));
        assert_eq!(RecordId::new("   "), Err(InvalidRecordId));
    }

    #[test]
    fn record_id_from_position_is_prefixed() {
        assert_eq!(RecordId::from_position(7).as_str(), "#7");
    }

    #[test]
    fn matches_name_case_insensitively() {
        let r = record("Iboya Vat", "iboya.vat@example.com");
        assert!(r.matches_folded("iboya"));
        assert!(r.matches_folded("vat"));
    }

    #[test]
    fn matches_email_only() {
        let r = record("Aapo Niskanen", "aapo.n@example.com");
        assert!(r.matches_folded("example.com"));
        assert!(!r.matches_folded("zzz"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(record("A", "b@c").matches_folded(""));
    }

    #[test]
    fn record_set_preserves_order() {
        let set: RecordSet = ["a", "b", "c"]
            .iter()
            .map(|n| record(n, "x@y"))
            .collect();
        let names: Vec<&str> = set.iter().map(Record::name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(set[1].name(), "b");
    }

    #[test]
    fn builder_attaches_optional_fields() {
        let date = NaiveDate::from_ymd_opt(2015, 7, 15).unwrap();
        let r = record("A", "a@b").with_joined(date).with_avatar("https://x/a.jpg");
        assert_eq!(r.joined(), Some(date));
        assert_eq!(r.avatar(), Some("https://x/a.jpg"));
    }
}
