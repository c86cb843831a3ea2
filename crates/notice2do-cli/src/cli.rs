//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Notice2Do - turn notices into task lists and calendar files.
#[derive(Debug, Parser)]
#[command(name = "notice2do")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON record
    Json,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract tasks from a notice and write a calendar file
    Extract(ExtractArgs),

    /// Write a calendar file from a saved record
    Calendar(CalendarArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Text file containing the notice (`.pdf` needs the `pdf` feature)
    #[arg(short = 'i', long, conflicts_with_all = ["stdin", "text"])]
    pub file: Option<PathBuf>,

    /// Read the notice from stdin
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,

    /// Notice text given inline
    #[arg(short, long)]
    pub text: Option<String>,

    /// Where to write the calendar file
    #[arg(long, default_value = notice2do_calendar::ICS_FILE_NAME)]
    pub ics: PathBuf,

    /// Skip writing the calendar file
    #[arg(long, conflicts_with = "ics")]
    pub no_ics: bool,

    /// Also save the extracted record as JSON
    #[arg(long)]
    pub save_record: Option<PathBuf>,

    /// Time zone identifier for calendar events
    #[arg(short, long)]
    pub zone: Option<String>,
}

/// Arguments for the calendar command.
#[derive(Debug, Parser)]
pub struct CalendarArgs {
    /// JSON record written by `extract --save-record`
    #[arg(short, long)]
    pub record: PathBuf,

    /// Where to write the calendar file
    #[arg(long, default_value = notice2do_calendar::ICS_FILE_NAME)]
    pub ics: PathBuf,

    /// Time zone identifier for calendar events
    #[arg(short, long)]
    pub zone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_with_file() {
        let cli = Cli::try_parse_from(["notice2do", "extract", "--file", "notice.txt"]).unwrap();
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.file, Some(PathBuf::from("notice.txt")));
                assert_eq!(args.ics, PathBuf::from("notice2do.ics"));
                assert!(!args.no_ics);
            }
            _ => panic!("Expected extract command"),
        }
    }

    #[test]
    fn test_extract_sources_conflict() {
        let result = Cli::try_parse_from([
            "notice2do", "extract", "--file", "a.txt", "--text", "inline",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_calendar_command() {
        let cli = Cli::try_parse_from([
            "notice2do", "--no-color", "calendar", "--record", "r.json", "--zone", "UTC",
        ])
        .unwrap();
        assert!(cli.no_color);
        match cli.command {
            Command::Calendar(args) => {
                assert_eq!(args.record, PathBuf::from("r.json"));
                assert_eq!(args.zone.as_deref(), Some("UTC"));
            }
            _ => panic!("Expected calendar command"),
        }
    }

    #[test]
    fn test_command_required() {
        assert!(Cli::try_parse_from(["notice2do"]).is_err());
    }
}
