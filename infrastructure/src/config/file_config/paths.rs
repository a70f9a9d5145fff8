//! Location configuration from TOML (`[scan]` and `[document]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw scan configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScanConfig {
    /// Directory holding the archives (default: the executable's directory)
    pub source_dir: Option<PathBuf>,
}

/// Raw document configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDocumentConfig {
    /// Markdown document path (default: `<source_dir>/../Win DailyUse Track Tools.md`)
    pub path: Option<PathBuf>,
}
