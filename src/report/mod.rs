//! Report rendering.
//!
//! Markdown output is spliced into a template between marker comments;
//! JSON output is written as-is.

pub mod generator;
pub mod json;
pub mod template;

pub use generator::generate_markdown_report;
pub use json::{generate_json_report, ReportMetadata};
