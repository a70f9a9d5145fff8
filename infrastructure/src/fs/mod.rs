//! Local file system adapters
//!
//! - [`LocalArchiveDirectory`]: lists the files of the tools directory
//! - [`MarkdownDocumentFile`]: whole-file read/write of the tracked document

mod archive_directory;
mod markdown_document;

pub use archive_directory::LocalArchiveDirectory;
pub use markdown_document::MarkdownDocumentFile;
