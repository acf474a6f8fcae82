//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.partypride.toml` files.

use crate::analysis::aliases::default_aliases;
use crate::analysis::normalizer::{default_excluded, default_synonyms};
use crate::analysis::{AliasTable, PartyNormalizer};
use crate::error::AnalysisError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".partypride.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// File locations.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Party aliases, excluded statuses and synonyms.
    #[serde(default)]
    pub parties: PartiesConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// JSON array of member records.
    #[serde(default = "default_input")]
    pub input: String,

    /// Markdown template containing the marker comments.
    #[serde(default = "default_template")]
    pub template: String,

    /// Where the finished report is written.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            template: default_template(),
            output: default_output(),
        }
    }
}

fn default_input() -> String {
    "output/members-api-and-pol-social-and-twitter-backup.json".to_string()
}

fn default_template() -> String {
    "template.markdown".to_string()
}

fn default_output() -> String {
    "docs/index.markdown".to_string()
}

/// Party label handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartiesConfig {
    /// Labels dropped from the report entirely.
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,

    /// Labels rewritten to a canonical party before lookup.
    #[serde(default = "default_synonyms")]
    pub synonyms: BTreeMap<String, String>,

    /// Canonical party name to the strings that count as mentioning it.
    #[serde(default = "default_aliases")]
    pub aliases: BTreeMap<String, Vec<String>>,
}

impl Default for PartiesConfig {
    fn default() -> Self {
        Self {
            excluded: default_excluded(),
            synonyms: default_synonyms(),
            aliases: default_aliases(),
        }
    }
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Parties smaller than this are left out of the summary table.
    #[serde(default = "default_summary_min_total")]
    pub summary_min_total: usize,

    /// Prefix joined with a member's handle to link their profile.
    #[serde(default = "default_profile_url_base")]
    pub profile_url_base: String,

    #[serde(default = "default_summary_begin")]
    pub summary_begin_marker: String,

    #[serde(default = "default_summary_end")]
    pub summary_end_marker: String,

    #[serde(default = "default_results_begin")]
    pub results_begin_marker: String,

    #[serde(default = "default_results_end")]
    pub results_end_marker: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            summary_min_total: default_summary_min_total(),
            profile_url_base: default_profile_url_base(),
            summary_begin_marker: default_summary_begin(),
            summary_end_marker: default_summary_end(),
            results_begin_marker: default_results_begin(),
            results_end_marker: default_results_end(),
        }
    }
}

fn default_summary_min_total() -> usize {
    10
}

fn default_profile_url_base() -> String {
    "https://twitter.com/".to_string()
}

fn default_summary_begin() -> String {
    "<!--summary-auto-gen-begin-->".to_string()
}

fn default_summary_end() -> String {
    "<!--summary-auto-gen-end-->".to_string()
}

fn default_results_begin() -> String {
    "<!--results-auto-gen-begin-->".to_string()
}

fn default_results_end() -> String {
    "<!--results-auto-gen-end-->".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load the default config file from `dir`.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default(dir: &Path) -> Result<Option<Self>> {
        let default_path = dir.join(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            Ok(Some(Self::load(&default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were actually given.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref input) = args.input {
            self.general.input = input.display().to_string();
        }
        if let Some(ref template) = args.template {
            self.general.template = template.display().to_string();
        }
        if let Some(ref output) = args.output {
            self.general.output = output.display().to_string();
        }
        if let Some(min_total) = args.summary_min_total {
            self.report.summary_min_total = min_total;
        }
    }

    /// Build the party normalizer described by the `[parties]` section.
    pub fn normalizer(&self) -> Result<PartyNormalizer, AnalysisError> {
        let table = AliasTable::new(self.parties.aliases.clone())?;
        PartyNormalizer::new(
            table,
            self.parties.excluded.iter().cloned(),
            self.parties.synonyms.clone(),
        )
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
