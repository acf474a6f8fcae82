//! Typed errors for the analysis pipeline and template splicing.

use thiserror::Error;

/// Fatal errors raised while classifying and aggregating members.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("unknown party '{label}': add it to the alias table, excluded statuses or synonyms")]
    UnknownParty { label: String },

    #[error("member record {index} is missing required field '{field}'")]
    MalformedInput { index: usize, field: &'static str },

    #[error("party '{party}' has no aliases configured")]
    EmptyAliasSet { party: String },

    #[error("synonym '{synonym}' points at unknown party '{target}'")]
    UnknownSynonymTarget { synonym: String, target: String },
}

/// Errors raised while splicing generated content into a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("couldn't find marker '{0}' in template")]
    MarkerNotFound(String),

    #[error("end marker '{end}' appears before start marker '{start}'")]
    MarkerOrder { start: String, end: String },
}
