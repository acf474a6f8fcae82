//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// PartyPride - which MPs mention their own party in their bio?
///
/// Reads a JSON dataset of MPs, classifies each one as proud (bio mentions
/// their party), shy (bio doesn't) or not on Twitter (no bio), and writes
/// the results into a Markdown template.
///
/// Examples:
///   partypride
///   partypride --input mps.json --template template.markdown --output docs/index.markdown
///   partypride --format json --output results.json
///   partypride --dry-run
///   partypride --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// JSON file containing the array of member records
    #[arg(short, long, value_name = "FILE", env = "PARTYPRIDE_INPUT")]
    pub input: Option<PathBuf>,

    /// Markdown template with the summary and results marker comments
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Output file path for the report
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .partypride.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Smallest party size listed in the summary table
    #[arg(long, value_name = "COUNT")]
    pub summary_min_total: Option<usize>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Dry run: classify members and print the summary without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .partypride.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown spliced into the template (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.summary_min_total == Some(0) {
            return Err("Summary minimum total must be at least 1".to_string());
        }

        if let Some(ref input) = self.input {
            if !input.is_file() {
                return Err(format!("Input file does not exist: {}", input.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
