//! File-based record source.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// Read-once record file.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a new FileSource for the given path.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file vanished after construction,
    /// `InputError::Io` for other I/O errors.
    pub fn read_contents(&self) -> Result<String, InputError> {
        std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => InputError::FileNotFound {
                path: self.path.clone(),
            },
            _ => InputError::Io(e),
        })
    }
}
