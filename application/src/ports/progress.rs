//! Progress notification port
//!
//! Defines the interface for reporting progress while the tool table is
//! being rebuilt.

use std::path::Path;
use tracktools_domain::{DocumentUpdate, ToolEntry};

/// Callback for progress updates during a tracking run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, nothing).
pub trait CatalogProgressNotifier: Send + Sync {
    /// Called once the directory scan is done, with the number of matching files
    fn on_scan_complete(&self, total: usize);

    /// Called before the description of a tool is looked up
    fn on_lookup_start(&self, _tool_name: &str) {}

    /// Called when a tool entry has been resolved
    fn on_entry_resolved(&self, entry: &ToolEntry);

    /// Called when a file is skipped because its name normalizes to nothing
    fn on_entry_skipped(&self, file_name: &str);

    /// Called after the document has been written
    fn on_document_written(&self, _path: &Path, _update: DocumentUpdate) {}

    /// Called once the run has finished, whether or not anything was written
    fn on_run_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl CatalogProgressNotifier for NoProgress {
    fn on_scan_complete(&self, _total: usize) {}
    fn on_entry_resolved(&self, _entry: &ToolEntry) {}
    fn on_entry_skipped(&self, _file_name: &str) {}
}
