//! Document store port
//!
//! Defines whole-file access to the tracked Markdown document.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing the document
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Port for reading and overwriting the tracked document.
pub trait DocumentStorePort: Send + Sync {
    /// Read the whole document. `Ok(None)` when it does not exist.
    fn read(&self, path: &Path) -> Result<Option<String>, DocumentStoreError>;

    /// Replace the document content with `content`.
    fn write(&self, path: &Path, content: &str) -> Result<(), DocumentStoreError>;
}
