//! Track parameters: what a single run operates on.
//!
//! [`TrackParams`] groups the resolved locations and switches for one
//! [`UpdateTrackTableUseCase`](crate::use_cases::update_track_table::UpdateTrackTableUseCase)
//! run. The binary builds it from config files and CLI flags.

use std::path::{Path, PathBuf};
use tracktools_domain::TARGET_DOCUMENT_NAME;

/// Run parameters for a tracking pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackParams {
    /// Directory scanned for archives and installers (not recursive).
    pub source_dir: PathBuf,
    /// Markdown document receiving the table.
    pub document_path: PathBuf,
    /// Skip remote lookups; every tool gets the fallback description.
    pub offline: bool,
    /// Render the table without writing the document.
    pub dry_run: bool,
}

impl TrackParams {
    /// Parameters for `source_dir` with the document in its parent directory.
    pub fn for_source_dir(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let document_path = default_document_path(&source_dir);
        Self {
            source_dir,
            document_path,
            offline: false,
            dry_run: false,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = path.into();
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// `<parent of source_dir>/Win DailyUse Track Tools.md`.
///
/// A filesystem root is its own parent.
pub fn default_document_path(source_dir: &Path) -> PathBuf {
    source_dir
        .parent()
        .unwrap_or(source_dir)
        .join(TARGET_DOCUMENT_NAME)
}
