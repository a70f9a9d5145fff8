//! Application-level configuration.
//!
//! - [`TrackParams`]: source directory, target document and run switches

pub mod track_params;

pub use track_params::{TrackParams, default_document_path};
