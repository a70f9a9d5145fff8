//! Candidate archive / installer files.

use std::path::{Path, PathBuf};

/// Extensions (lower-case, with leading dot) that are picked up by a scan.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".7z", ".zip", ".rar", ".exe"];

/// Check whether a filename carries one of [`SUPPORTED_EXTENSIONS`].
///
/// Comparison is case-insensitive (`Setup.EXE` matches). A bare dotfile such
/// as `.zip` has no extension and does not match.
pub fn is_supported_archive(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = format!(".{}", ext.to_lowercase());
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// A file found during a directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// File name including extension
    pub file_name: String,
    /// Full path of the file
    pub path: PathBuf,
}

impl CandidateFile {
    pub fn new(file_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            path: path.into(),
        }
    }

    /// Lower-cased extension including the leading dot, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
    }
}
