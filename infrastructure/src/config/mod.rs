//! Configuration file loading for track-tools
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./track-tools.toml` or `./.track-tools.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/track-tools/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDocumentConfig, FileLookupConfig, FileOutputConfig, FileScanConfig,
};
pub use loader::ConfigLoader;
