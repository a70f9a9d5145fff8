//! Infrastructure layer for track-tools
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod fs;
pub mod lookup;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDocumentConfig, FileLookupConfig, FileOutputConfig,
    FileScanConfig,
};
pub use fs::{LocalArchiveDirectory, MarkdownDocumentFile};
pub use lookup::{
    DuckDuckGoInstantAnswerSource, LOOKUP_TIMEOUT, USER_AGENT, WikipediaSummarySource,
    build_http_client,
};
