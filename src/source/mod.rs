//! Record input sources.
//!
//! This module provides input sources for student records:
//! - File loading for a path argument
//! - Stdin for piped input
//! - Unified InputSource enum for both

use crate::model::error::{AppError, InputError};
use crate::parser::{self, ParsedRoster};
use std::path::PathBuf;
use tracing::{info, warn};

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for record data.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// File source - path given on the command line
    File(FileSource),
    /// Stdin source - piped data
    Stdin(StdinSource),
}

impl InputSource {
    /// Read and parse every record from the source.
    ///
    /// Malformed entries are logged and returned alongside the good records.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InputRead` for I/O failures and `AppError::Parse` when the
    /// source as a whole is unreadable (a broken JSON array).
    pub fn load(&mut self) -> Result<ParsedRoster, AppError> {
        let contents = match self {
            InputSource::File(f) => f.read_contents()?,
            InputSource::Stdin(s) => s.read_contents()?,
        };

        let roster = parser::parse_records(&contents)?;

        for malformed in &roster.malformed {
            warn!(
                "Skipping malformed record at {}: {}",
                malformed.position(),
                malformed.error_message()
            );
        }
        info!(
            records = roster.records.len(),
            malformed = roster.malformed.len(),
            source = self.describe(),
            "Records loaded"
        );

        Ok(roster)
    }

    /// Short label for the status bar and logs.
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => "<stdin>".to_string(),
        }
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: create FileSource
/// 2. If stdin is piped: use StdinSource
/// 3. Else: return InputError::NoInput
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is not piped.
/// Returns `InputError::FileNotFound` if file does not exist.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
