//! Console output formatter for tracking runs

use colored::Colorize;
use tracktools_application::UpdateTrackTableOutput;
use tracktools_domain::DescriptionOrigin;

/// Formats tracking results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The two confirmation lines printed after a successful write.
    pub fn format_success(output: &UpdateTrackTableOutput) -> String {
        format!(
            "{}\n{} {}",
            "Tool table successfully generated and updated.".green().bold(),
            "Target file:".cyan().bold(),
            output.document_path.display()
        )
    }

    /// One-line breakdown of where descriptions came from.
    pub fn format_summary(output: &UpdateTrackTableOutput) -> String {
        let mut summary = format!(
            "{} {} recorded ({} encyclopedia, {} instant answer, {} fallback)",
            "Tools:".dimmed(),
            output.entries.len(),
            output.count_by_origin(DescriptionOrigin::Encyclopedia),
            output.count_by_origin(DescriptionOrigin::InstantAnswer),
            output.count_by_origin(DescriptionOrigin::Fallback),
        );

        if !output.skipped.is_empty() {
            summary.push_str(&format!(
                ", {} skipped: {}",
                output.skipped.len(),
                output.skipped.join(", ")
            ));
        }

        summary
    }

    /// Note shown under the table in dry-run mode.
    pub fn format_dry_run_note(output: &UpdateTrackTableOutput) -> String {
        format!(
            "{} {} not written (table would be {})",
            "Dry run:".yellow().bold(),
            output.document_path.display(),
            output.update
        )
    }
}
