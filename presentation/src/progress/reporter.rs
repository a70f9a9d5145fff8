//! Progress reporting for tracking runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use tracktools_application::CatalogProgressNotifier;
use tracktools_domain::{DescriptionOrigin, ToolEntry};

/// Reports lookup progress with a progress bar (drawn on stderr)
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Short status marker for an entry
fn origin_marker(origin: DescriptionOrigin) -> String {
    match origin {
        DescriptionOrigin::Encyclopedia => "v".green().to_string(),
        DescriptionOrigin::InstantAnswer => "v".cyan().to_string(),
        DescriptionOrigin::Fallback => "~".yellow().to_string(),
    }
}

impl CatalogProgressNotifier for ProgressReporter {
    fn on_scan_complete(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Looking up");
        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_lookup_start(&self, tool_name: &str) {
        let name = tool_name.to_string();
        self.with_bar(|pb| pb.set_message(name));
    }

    fn on_entry_resolved(&self, entry: &ToolEntry) {
        let status = format!("{} {}", origin_marker(entry.origin), entry.name);
        self.with_bar(|pb| {
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_entry_skipped(&self, file_name: &str) {
        let status = format!("{} {}", "x".red(), file_name);
        self.with_bar(|pb| {
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_run_complete(&self) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI), one line per tool on stderr
pub struct SimpleProgress;

impl CatalogProgressNotifier for SimpleProgress {
    fn on_scan_complete(&self, total: usize) {
        eprintln!("{} {} ({} files)", "->".cyan(), "Looking up tools".bold(), total);
    }

    fn on_entry_resolved(&self, entry: &ToolEntry) {
        eprintln!(
            "  {} {} ({})",
            origin_marker(entry.origin),
            entry.name,
            entry.origin
        );
    }

    fn on_entry_skipped(&self, file_name: &str) {
        eprintln!("  {} {} (empty name, skipped)", "x".red(), file_name);
    }
}
