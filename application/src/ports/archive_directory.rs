//! Archive directory port
//!
//! Defines how the application enumerates the files of the tools directory.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracktools_domain::CandidateFile;

/// Errors that can occur while listing the tools directory
#[derive(Error, Debug)]
pub enum ArchiveDirectoryError {
    #[error("Tools directory not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Port for listing the files of a directory.
///
/// Adapters return every regular file directly inside `dir` (no recursion,
/// no directories). Extension filtering is the caller's job.
pub trait ArchiveDirectoryPort: Send + Sync {
    fn list_files(&self, dir: &Path) -> Result<Vec<CandidateFile>, ArchiveDirectoryError>;
}
