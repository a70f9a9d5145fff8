//! CLI entrypoint for track-tools
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracktools_application::{
    CatalogProgressNotifier, NoProgress, ResolveFunctionUseCase, UpdateTrackTableInput,
    UpdateTrackTableUseCase,
};
use tracktools_infrastructure::{
    ConfigLoader, DuckDuckGoInstantAnswerSource, FileConfig, LocalArchiveDirectory,
    MarkdownDocumentFile, WikipediaSummarySource, build_http_client,
};
use tracktools_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};

// Lookups are awaited one at a time; a single thread is all the run needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("{}", e))
            .context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let default_dir = executable_dir().context("Failed to locate the executable directory")?;
    let params = config.track_params(&default_dir).with_dry_run(cli.dry_run);
    info!(
        "Tools directory: {}, document: {}",
        params.source_dir.display(),
        params.document_path.display()
    );

    // === Dependency Injection ===
    let resolver = if params.offline {
        info!("Offline mode, remote lookups disabled");
        ResolveFunctionUseCase::offline()
    } else {
        let client = build_http_client().context("Failed to build HTTP client")?;
        ResolveFunctionUseCase::new(
            Arc::new(WikipediaSummarySource::new(client.clone())),
            Arc::new(DuckDuckGoInstantAnswerSource::new(client)),
        )
    };

    let use_case = UpdateTrackTableUseCase::new(
        Arc::new(LocalArchiveDirectory::new()),
        Arc::new(MarkdownDocumentFile::new()),
        resolver,
    );

    let progress: Box<dyn CatalogProgressNotifier> = if cli.quiet || !config.output.show_progress
    {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let output = use_case
        .execute(UpdateTrackTableInput::new(params), progress.as_ref())
        .await
        .context("Failed to update the tool table")?;

    // Output results
    if output.written {
        println!("{}", ConsoleFormatter::format_success(&output));
    } else {
        println!("{}", output.table);
        eprintln!("{}", ConsoleFormatter::format_dry_run_note(&output));
    }

    if cli.verbose > 0 {
        println!("{}", ConsoleFormatter::format_summary(&output));
    }

    Ok(())
}

/// CLI flags take precedence over every config file.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(dir) = &cli.dir {
        config.scan.source_dir = Some(dir.clone());
    }
    if let Some(path) = &cli.output {
        config.document.path = Some(path.clone());
    }
    if cli.offline {
        config.lookup.offline = true;
    }
}

/// Directory holding the running executable, symlinks resolved.
fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe.display()))
}
