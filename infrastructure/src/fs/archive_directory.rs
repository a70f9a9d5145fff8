//! Local tools directory listing

use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use tracktools_application::{ArchiveDirectoryError, ArchiveDirectoryPort};
use tracktools_domain::CandidateFile;

/// Lists the regular files directly inside a directory on the local disk.
///
/// Symlinks are followed, sub-directories are ignored, and file names that
/// are not valid UTF-8 are skipped with a warning. Results are sorted by
/// file name so runs are reproducible.
#[derive(Debug, Clone, Default)]
pub struct LocalArchiveDirectory;

impl LocalArchiveDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveDirectoryPort for LocalArchiveDirectory {
    fn list_files(&self, dir: &Path) -> Result<Vec<CandidateFile>, ArchiveDirectoryError> {
        if !dir.is_dir() {
            return Err(ArchiveDirectoryError::NotFound(dir.to_path_buf()));
        }

        let io_err = |source| ArchiveDirectoryError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => files.push(CandidateFile::new(name, path)),
                Err(raw) => warn!("Skipping non UTF-8 file name: {:?}", raw),
            }
        }

        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        debug!("{} file(s) in {}", files.len(), dir.display());
        Ok(files)
    }
}
