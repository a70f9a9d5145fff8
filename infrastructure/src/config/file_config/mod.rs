//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field is optional; missing values take the built-in defaults.

mod lookup;
mod output;
mod paths;

pub use lookup::FileLookupConfig;
pub use output::FileOutputConfig;
pub use paths::{FileDocumentConfig, FileScanConfig};

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tracktools_application::TrackParams;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Tools directory settings
    pub scan: FileScanConfig,
    /// Target document settings
    pub document: FileDocumentConfig,
    /// Remote lookup settings
    pub lookup: FileLookupConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Build run parameters, using `default_source_dir` when `[scan]`
    /// does not name a directory.
    ///
    /// The source directory is made absolute first so that the document
    /// lands in its real parent for inputs like `.` or `tools/..`.
    pub fn track_params(&self, default_source_dir: &Path) -> TrackParams {
        let source_dir = absolute_dir(
            self.scan
                .source_dir
                .as_deref()
                .unwrap_or(default_source_dir),
        );

        let mut params = TrackParams::for_source_dir(source_dir).with_offline(self.lookup.offline);
        if let Some(path) = &self.document.path {
            params = params.with_document_path(path);
        }
        params
    }
}

/// Absolute form of `dir` with `.` and `..` folded lexically.
fn absolute_dir(dir: &Path) -> PathBuf {
    let absolute = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[scan]
source_dir = "/mnt/tools"

[document]
path = "/mnt/notes/tools.md"

[lookup]
offline = true

[output]
color = false
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scan.source_dir, Some(PathBuf::from("/mnt/tools")));
        assert_eq!(config.document.path, Some(PathBuf::from("/mnt/notes/tools.md")));
        assert!(config.lookup.offline);
        assert!(!config.output.color);
        assert!(!config.output.show_progress);
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_track_params_defaults() {
        let params = FileConfig::default().track_params(Path::new("/opt/tools"));
        assert_eq!(params.source_dir, PathBuf::from("/opt/tools"));
        assert_eq!(
            params.document_path,
            PathBuf::from("/opt/Win DailyUse Track Tools.md")
        );
        assert!(!params.offline);
    }

    #[test]
    fn test_track_params_from_config() {
        let config: FileConfig = toml::from_str(
            r#"
[scan]
source_dir = "/mnt/tools"

[lookup]
offline = true
"#,
        )
        .unwrap();

        let params = config.track_params(Path::new("/opt/tools"));
        assert_eq!(params.source_dir, PathBuf::from("/mnt/tools"));
        assert_eq!(
            params.document_path,
            PathBuf::from("/mnt/Win DailyUse Track Tools.md")
        );
        assert!(params.offline);
    }

    #[test]
    fn test_relative_source_dir_is_made_absolute() {
        let config: FileConfig = toml::from_str("[scan]\nsource_dir = \".\"\n").unwrap();
        let cwd = std::env::current_dir().unwrap();

        let params = config.track_params(Path::new("/opt/tools"));
        assert_eq!(params.source_dir, cwd);
        assert_eq!(
            params.document_path,
            cwd.parent().unwrap_or(&cwd).join("Win DailyUse Track Tools.md")
        );
    }

    #[test]
    fn test_parent_components_are_folded() {
        let config: FileConfig = toml::from_str(
            r#"
[scan]
source_dir = "/mnt/tools/./nested/.."
"#,
        )
        .unwrap();

        let params = config.track_params(Path::new("/opt/tools"));
        assert_eq!(params.source_dir, PathBuf::from("/mnt/tools"));
        assert_eq!(
            params.document_path,
            PathBuf::from("/mnt/Win DailyUse Track Tools.md")
        );
    }
}
