//! Application layer for track-tools
//!
//! This crate contains use cases, port definitions, and run parameters.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{TrackParams, default_document_path};
pub use ports::{
    archive_directory::{ArchiveDirectoryError, ArchiveDirectoryPort},
    description_source::{DescriptionSource, DisabledSource},
    document_store::{DocumentStoreError, DocumentStorePort},
    progress::{CatalogProgressNotifier, NoProgress},
};
pub use use_cases::resolve_function::ResolveFunctionUseCase;
pub use use_cases::update_track_table::{
    UpdateTrackTableError, UpdateTrackTableInput, UpdateTrackTableOutput, UpdateTrackTableUseCase,
};
