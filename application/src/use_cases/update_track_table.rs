//! Update Track Table use case.
//!
//! The driver of a tracking run:
//!
//! 1. List the files of the tools directory and keep supported archives
//! 2. Normalize each filename into a display name (empty names are skipped)
//! 3. Resolve each name's description via [`ResolveFunctionUseCase`]
//! 4. Sort entries case-insensitively and render the Markdown table
//! 5. Merge the table into the tracked document and write it back
//!
//! Lookups run one after another; a hung request holds the run for the
//! full client timeout.

use crate::config::TrackParams;
use crate::ports::archive_directory::{ArchiveDirectoryError, ArchiveDirectoryPort};
use crate::ports::document_store::{DocumentStoreError, DocumentStorePort};
use crate::ports::progress::CatalogProgressNotifier;
use crate::use_cases::resolve_function::ResolveFunctionUseCase;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use tracktools_domain::{
    CandidateFile, DescriptionOrigin, DocumentUpdate, ToolEntry, is_supported_archive,
    merge_table, normalize_tool_name, render_table, sort_entries,
};

/// Errors that can occur during a tracking run.
///
/// Lookup problems never show up here; they end in the fallback description.
#[derive(Error, Debug)]
pub enum UpdateTrackTableError {
    #[error(transparent)]
    Scan(#[from] ArchiveDirectoryError),

    #[error(transparent)]
    Document(#[from] DocumentStoreError),
}

/// Input for the [`UpdateTrackTableUseCase`].
#[derive(Debug, Clone)]
pub struct UpdateTrackTableInput {
    pub params: TrackParams,
}

impl UpdateTrackTableInput {
    pub fn new(params: TrackParams) -> Self {
        Self { params }
    }
}

/// Result of a tracking run.
#[derive(Debug, Clone)]
pub struct UpdateTrackTableOutput {
    /// Entries in table order
    pub entries: Vec<ToolEntry>,
    /// Files whose names normalized to an empty string
    pub skipped: Vec<String>,
    /// The rendered table
    pub table: String,
    /// Document the table was (or would have been) merged into
    pub document_path: PathBuf,
    /// Which merge branch applied
    pub update: DocumentUpdate,
    /// `false` for dry runs
    pub written: bool,
}

impl UpdateTrackTableOutput {
    /// Number of entries whose description came from `origin`.
    pub fn count_by_origin(&self, origin: DescriptionOrigin) -> usize {
        self.entries.iter().filter(|e| e.origin == origin).count()
    }
}

/// Use case for rebuilding the tool table.
pub struct UpdateTrackTableUseCase {
    directory: Arc<dyn ArchiveDirectoryPort>,
    documents: Arc<dyn DocumentStorePort>,
    resolver: ResolveFunctionUseCase,
}

impl UpdateTrackTableUseCase {
    pub fn new(
        directory: Arc<dyn ArchiveDirectoryPort>,
        documents: Arc<dyn DocumentStorePort>,
        resolver: ResolveFunctionUseCase,
    ) -> Self {
        Self {
            directory,
            documents,
            resolver,
        }
    }

    /// Run the whole pipeline with progress callbacks.
    pub async fn execute(
        &self,
        input: UpdateTrackTableInput,
        progress: &dyn CatalogProgressNotifier,
    ) -> Result<UpdateTrackTableOutput, UpdateTrackTableError> {
        let params = input.params;
        info!("Scanning {}", params.source_dir.display());

        let candidates: Vec<CandidateFile> = self
            .directory
            .list_files(&params.source_dir)?
            .into_iter()
            .filter(|file| is_supported_archive(&file.file_name))
            .collect();

        info!("Found {} archive(s)", candidates.len());
        progress.on_scan_complete(candidates.len());

        let mut entries = Vec::with_capacity(candidates.len());
        let mut skipped = Vec::new();

        for file in &candidates {
            let name = normalize_tool_name(&file.file_name);
            if name.is_empty() {
                warn!("Skipping {}: name is empty after normalization", file.file_name);
                progress.on_entry_skipped(&file.file_name);
                skipped.push(file.file_name.clone());
                continue;
            }

            progress.on_lookup_start(&name);
            let resolved = self.resolver.execute(&name).await;
            let entry = ToolEntry::new(name, resolved.text, resolved.origin);
            progress.on_entry_resolved(&entry);
            entries.push(entry);
        }

        sort_entries(&mut entries);
        let table = render_table(&entries);

        let existing = self.documents.read(&params.document_path)?;
        let (content, update) = merge_table(existing.as_deref(), &table);

        let written = !params.dry_run;
        if written {
            self.documents.write(&params.document_path, &content)?;
            info!(
                "Document {} ({}): {} entries",
                params.document_path.display(),
                update,
                entries.len()
            );
            progress.on_document_written(&params.document_path, update);
        } else {
            info!("Dry run, {} left untouched", params.document_path.display());
        }
        progress.on_run_complete();

        Ok(UpdateTrackTableOutput {
            entries,
            skipped,
            table,
            document_path: params.document_path,
            update,
            written,
        })
    }
}
