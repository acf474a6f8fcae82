//! JSON report generation.

use crate::models::{AggregateResult, PartyBucket};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata about a report run.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Path of the member dataset.
    pub input: String,
    /// Date and time the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Records read from the input.
    pub members_read: usize,
    /// Records counted towards a party.
    pub members_counted: usize,
    /// Records dropped because of an excluded status.
    pub members_skipped: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: &'a ReportMetadata,
    summary: &'a [String],
    parties: Vec<&'a PartyBucket>,
}

/// Generate a JSON report with the parties in presentation order.
pub fn generate_json_report(result: &AggregateResult, metadata: &ReportMetadata) -> Result<String> {
    let report = JsonReport {
        metadata,
        summary: &result.summary_order,
        parties: result.ordered().collect(),
    };
    serde_json::to_string_pretty(&report).map_err(Into::into)
}
