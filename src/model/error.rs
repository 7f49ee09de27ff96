//! Error types for roster.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Record file/stdin reading failures (file not found, no input, IO)
//!   - [`ParseError`] - Record parsing failures (malformed JSON, missing fields, bad dates)
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Parse errors for a single record are **non-fatal**: the entry becomes a
//! [`MalformedRecord`](crate::model::MalformedRecord), is logged, and skipped. Input and
//! terminal errors are fatal and propagate to `main`.
//!
//! The pagination core has no error kinds at all. Out-of-range pages and empty search
//! results are ordinary states, not failures.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use roster::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _input = read_roster()?;
///     Ok(())
/// }
/// # fn read_roster() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read input from file or stdin. Fatal.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to parse the record source as a whole (e.g. a broken JSON array).
    #[error("Failed to parse records: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error. Fatal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading record input from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified record file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use roster::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided - user must supply a file path or pipe stdin.
    ///
    /// ```
    /// use roster::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing record entries.
///
/// `line` is the 1-based line number for JSON Lines input, or the 1-based array position
/// for JSON array input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text is not valid JSON.
    ///
    /// ```
    /// use roster::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson {
    ///     line: 42,
    ///     message: "expected value".to_string()
    /// };
    /// assert!(err.to_string().contains("line 42"));
    /// ```
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// Position of the failing entry.
        line: usize,
        /// Parser message from `serde_json`.
        message: String,
    },

    /// A required field is absent.
    #[error("Missing required field '{field}' at line {line}")]
    MissingField {
        /// Position of the failing entry.
        line: usize,
        /// Field name from the record schema.
        field: &'static str,
    },

    /// A required text field is present but blank.
    #[error("Field '{field}' is empty at line {line}")]
    EmptyField {
        /// Position of the failing entry.
        line: usize,
        /// Field name from the record schema.
        field: &'static str,
    },

    /// The `joined` date matches none of the accepted formats.
    #[error("Invalid date '{raw}' at line {line}")]
    InvalidDate {
        /// Position of the failing entry.
        line: usize,
        /// The date text as written.
        raw: String,
    },
}
