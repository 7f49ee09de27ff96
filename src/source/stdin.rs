//! Stdin-based record source for piped input.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Stdin source for piped record data (`cat students.jsonl | roster`).
///
/// The whole stream is read once; the record set never changes afterwards.
pub struct StdinSource {
    reader: Box<dyn Read>,
}

impl std::fmt::Debug for StdinSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdinSource").finish_non_exhaustive()
    }
}

impl StdinSource {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY. This keeps the TUI from
    /// blocking on user input when the user forgot to pipe data.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self {
            reader: Box::new(stdin),
        })
    }

    /// Create StdinSource from any reader. Bypasses the TTY check.
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Read the stream to EOF.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for I/O errors or invalid UTF-8.
    pub fn read_contents(&mut self) -> Result<String, InputError> {
        let mut buffer = String::new();
        self.reader.read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}
