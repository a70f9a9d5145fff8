//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod archive_directory;
pub mod description_source;
pub mod document_store;
pub mod progress;
