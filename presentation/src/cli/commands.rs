//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for track-tools
#[derive(Parser, Debug)]
#[command(name = "track-tools")]
#[command(author, version, about = "Keep a Markdown table of the portable tools in a folder")]
#[command(long_about = r#"
track-tools scans a folder for archives and installers (.7z, .zip, .rar, .exe),
turns each filename into a tool name, looks up a one-sentence description
(Wikipedia first, then DuckDuckGo, then "Windows utility tool") and writes a
"| Name | Function |" table into "Win DailyUse Track Tools.md" next to the folder.

An existing table in that document is replaced; anything above it is kept.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./track-tools.toml  Project-level config
3. ~/.config/track-tools/config.toml   Global config

Example:
  track-tools
  track-tools --dir D:\Tools
  track-tools --dir ./tools --output ./README.md --dry-run
"#)]
pub struct Cli {
    /// Directory to scan (default: the directory holding this executable)
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Markdown document to update (default: <dir>/../Win DailyUse Track Tools.md)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip remote lookups and use the fallback description for every tool
    #[arg(long)]
    pub offline: bool,

    /// Print the table instead of writing the document
    #[arg(long)]
    pub dry_run: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["track-tools"]).unwrap();
        assert!(cli.dir.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.offline);
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "track-tools",
            "--dir",
            "/mnt/tools",
            "-o",
            "/mnt/tools.md",
            "--offline",
            "--dry-run",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/mnt/tools")));
        assert_eq!(cli.output, Some(PathBuf::from("/mnt/tools.md")));
        assert!(cli.offline);
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }
}
