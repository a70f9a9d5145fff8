//! Tracked Markdown document on the local disk

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use tracktools_application::{DocumentStoreError, DocumentStorePort};

/// Reads and overwrites the tracked document as UTF-8 text.
///
/// Writes go straight to the target path; there is no temporary file or
/// backup. The parent directory must already exist.
#[derive(Debug, Clone, Default)]
pub struct MarkdownDocumentFile;

impl MarkdownDocumentFile {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentStorePort for MarkdownDocumentFile {
    fn read(&self, path: &Path) -> Result<Option<String>, DocumentStoreError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!("Read {} bytes from {}", content.len(), path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(DocumentStoreError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), DocumentStoreError> {
        fs::write(path, content).map_err(|source| DocumentStoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let doc = MarkdownDocumentFile::new();
        assert!(doc.read(&dir.path().join("missing.md")).unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Win DailyUse Track Tools.md");
        let doc = MarkdownDocumentFile::new();

        doc.write(&path, "# Tools\n\n| Name | Function |").unwrap();
        assert_eq!(
            doc.read(&path).unwrap().as_deref(),
            Some("# Tools\n\n| Name | Function |")
        );

        doc.write(&path, "replaced").unwrap();
        assert_eq!(doc.read(&path).unwrap().as_deref(), Some("replaced"));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = MarkdownDocumentFile::new().read(&path).unwrap_err();
        assert!(matches!(err, DocumentStoreError::Read { .. }));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("doc.md");

        let err = MarkdownDocumentFile::new().write(&path, "x").unwrap_err();
        assert!(matches!(err, DocumentStoreError::Write { .. }));
    }
}
