//! Tool catalog: candidate files, name normalization and table entries.
//!
//! - [`archive`]: which files count as tools ([`SUPPORTED_EXTENSIONS`](archive::SUPPORTED_EXTENSIONS))
//! - [`normalizer`]: filename → display name ([`NameRule`](normalizer::NameRule) pipeline)
//! - [`entry`]: [`ToolEntry`](entry::ToolEntry) rows and their ordering

pub mod archive;
pub mod entry;
pub mod normalizer;
