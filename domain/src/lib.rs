//! Domain layer for track-tools
//!
//! This crate contains the pure logic of the tool tracker. It performs no
//! I/O and has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! Archive and installer files (`.7z`, `.zip`, `.rar`, `.exe`) found in the
//! tools directory become [`ToolEntry`] rows. Their display names come from
//! an ordered [`NameRule`] pipeline ([`normalize_tool_name`]).
//!
//! ## Lookup
//!
//! Each tool's description comes from a best-effort remote lookup that
//! yields a typed [`LookupOutcome`] instead of an error, falling back to
//! [`FALLBACK_DESCRIPTION`].
//!
//! ## Document
//!
//! The rendered table ([`render_table`]) replaces the table block of the
//! tracked Markdown document, or is appended to it ([`merge_table`]).

pub mod catalog;
pub mod document;
pub mod lookup;

// Re-export commonly used types
pub use catalog::{
    archive::{CandidateFile, SUPPORTED_EXTENSIONS, is_supported_archive},
    entry::{ToolEntry, sort_entries},
    normalizer::{NameRule, normalize_tool_name, title_case},
};
pub use document::{
    DocumentUpdate, TABLE_HEADER, TABLE_SEPARATOR, TARGET_DOCUMENT_NAME, merge_table,
    render_table,
};
pub use lookup::{
    DescriptionOrigin, FALLBACK_DESCRIPTION, LookupOutcome, NoDataReason, ResolvedDescription,
    first_sentence,
};
