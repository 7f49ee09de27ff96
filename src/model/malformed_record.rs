//! Malformed record type for entries that could not be parsed.
//!
//! A bad entry does not abort loading. It is kept here so the status bar can
//! report it and the log file can name the line.

/// A source entry that could not be turned into a Record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    position: usize,
    raw: String,
    error_message: String,
}

impl MalformedRecord {
    /// Create a new malformed record.
    ///
    /// # Arguments
    ///
    /// * `position` - Line number (JSONL) or array position (JSON), 1-indexed
    /// * `raw` - The raw text that failed to parse
    /// * `error_message` - Human-readable error message
    pub fn new(position: usize, raw: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            position,
            raw: raw.into(),
            error_message: error_message.into(),
        }
    }

    /// Line number (JSONL) or array index (JSON) of the entry, 1-based.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The entry text as it appeared in the input.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Why the entry was rejected.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}
