//! Party label normalization.
//!
//! Maps the party labels published by the data source onto canonical
//! party names, dropping excluded statuses along the way.

use super::aliases::{AliasSet, AliasTable};
use crate::error::AnalysisError;
use std::collections::{BTreeMap, BTreeSet};

/// Outcome of normalizing one party label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalized<'a> {
    /// The label resolved to a canonical party.
    Party(&'a str, &'a AliasSet),
    /// The label is an excluded status; the record takes no part in the report.
    Excluded,
}

/// Resolves raw labels against an alias table.
#[derive(Debug, Clone)]
pub struct PartyNormalizer {
    table: AliasTable,
    excluded: BTreeSet<String>,
    synonyms: BTreeMap<String, String>,
}

impl PartyNormalizer {
    /// Creates a normalizer, checking that every synonym targets a known party.
    pub fn new<E, S>(
        table: AliasTable,
        excluded: E,
        synonyms: BTreeMap<String, String>,
    ) -> Result<Self, AnalysisError>
    where
        E: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some((synonym, target)) = synonyms
            .iter()
            .find(|(_, target)| !table.contains(target.as_str()))
        {
            return Err(AnalysisError::UnknownSynonymTarget {
                synonym: synonym.clone(),
                target: target.clone(),
            });
        }

        Ok(Self {
            table,
            excluded: excluded.into_iter().map(Into::into).collect(),
            synonyms,
        })
    }

    /// Normalizes a raw party label.
    ///
    /// Labels are compared exactly. Anything that is not excluded, a synonym
    /// or a canonical name is an `UnknownParty` error.
    pub fn normalize<'a>(&'a self, label: &'a str) -> Result<Normalized<'a>, AnalysisError> {
        if self.excluded.contains(label) {
            return Ok(Normalized::Excluded);
        }

        let canonical = self
            .synonyms
            .get(label)
            .map(String::as_str)
            .unwrap_or(label);

        match self.table.get(canonical) {
            Some((name, aliases)) => Ok(Normalized::Party(name, aliases)),
            None => Err(AnalysisError::UnknownParty {
                label: label.to_string(),
            }),
        }
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }
}

/// Statuses that never count towards any party.
pub fn default_excluded() -> Vec<String> {
    vec!["Speaker".to_string(), "Independent".to_string()]
}

/// Labels that are organizationally the same as a canonical party.
pub fn default_synonyms() -> BTreeMap<String, String> {
    [("Labour (Co-op)", "Labour")]
        .into_iter()
        .map(|(synonym, target)| (synonym.to_string(), target.to_string()))
        .collect()
}

impl Default for PartyNormalizer {
    fn default() -> Self {
        Self {
            table: AliasTable::default(),
            excluded: default_excluded().into_iter().collect(),
            synonyms: default_synonyms(),
        }
    }
}
