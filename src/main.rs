//! PartyPride - do MPs mention their party in their bio?
//!
//! A CLI tool that classifies every MP in a dataset by whether their
//! social media biography names their own party, and publishes the
//! per-party results into a Markdown template.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Any error (unknown party, malformed record, missing marker, I/O)

mod analysis;
mod cli;
mod config;
mod error;
mod models;
mod report;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat};
use config::{Config, DEFAULT_CONFIG_FILE};
use models::{AggregateResult, Category, Member};
use report::ReportMetadata;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // No logging needed to write a config file
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    info!("PartyPride v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args) {
        error!("Report failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .partypride.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            DEFAULT_CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("✅ Created {} with default settings.", DEFAULT_CONFIG_FILE);
    println!("   Edit it to customize party aliases, excluded statuses and markers.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Run the complete report workflow.
fn run(args: &Args) -> Result<()> {
    let mut config = load_config(args, Path::new("."))?;
    config.merge_with_args(args);

    let normalizer = config
        .normalizer()
        .context("Invalid [parties] configuration")?;
    for (party, aliases) in normalizer.table().iter() {
        debug!("Aliases for {}: {}", party, aliases.aliases().join(", "));
    }

    println!("📥 Reading members: {}", config.general.input);
    let members = load_members(Path::new(&config.general.input))?;

    println!("🔬 Classifying {} members...", members.len());
    let result = analysis::aggregate(&members, &normalizer, config.report.summary_min_total)?;

    if args.dry_run {
        print_summary(&result);
        println!("\n✅ Dry run complete. Nothing was written.");
        return Ok(());
    }

    println!("📝 Generating report...");
    let output = render_report(&config, &result, args.format)?;
    write_output(Path::new(&config.general.output), &output)?;

    print_summary(&result);
    println!("\n✅ Report saved to: {}", config.general.output);

    Ok(())
}

/// Load configuration from file, or use defaults when no config file exists.
///
/// A config file that exists but can't be read or parsed is an error.
fn load_config(args: &Args, dir: &Path) -> Result<Config> {
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    match Config::load_default(dir) {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", DEFAULT_CONFIG_FILE);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e.context("Refusing to fall back to the built-in party tables")),
    }
}

/// Read the member dataset, a JSON array of member records.
fn load_members(path: &Path) -> Result<Vec<Member>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read members from {}", path.display()))?;

    let members: Vec<Member> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse members from {}", path.display()))?;

    Ok(members)
}

/// Render the full report in the requested format.
fn render_report(config: &Config, result: &AggregateResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => {
            let template = std::fs::read_to_string(&config.general.template).with_context(|| {
                format!("Failed to read template {}", config.general.template)
            })?;
            report::generate_markdown_report(result, &template, &config.report)
                .with_context(|| format!("Failed to fill template {}", config.general.template))
        }
        OutputFormat::Json => {
            let metadata = ReportMetadata {
                input: config.general.input.clone(),
                generated_at: Utc::now(),
                members_read: result.members_read,
                members_counted: result.counted(),
                members_skipped: result.skipped,
            };
            report::generate_json_report(result, &metadata)
        }
    }
}

/// Write the rendered report, creating the parent directory if needed.
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}

fn print_summary(result: &AggregateResult) {
    println!("\n📊 Summary:");
    println!(
        "   Members: {} read, {} counted, {} skipped",
        result.members_read,
        result.counted(),
        result.skipped
    );
    for bucket in result.ordered() {
        println!(
            "   - {}: {} ({} proud | {} shy | {} not on Twitter)",
            bucket.name,
            bucket.total,
            bucket.count(Category::Proud),
            bucket.count(Category::Shy),
            bucket.count(Category::Invisible)
        );
    }
}
