//! Party alias table.
//!
//! Maps each canonical party name to the strings that count as a
//! self-reference when they appear in a member's biography.

use crate::error::AnalysisError;
use serde::Serialize;
use std::collections::BTreeMap;

/// The aliases for one party, with lowercase needles cached for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasSet {
    aliases: Vec<String>,
    #[serde(skip)]
    needles: Vec<String>,
}

impl AliasSet {
    /// Builds an alias set, dropping blank and case-insensitively repeated entries.
    pub fn new<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self {
            aliases: Vec::new(),
            needles: Vec::new(),
        };

        for alias in aliases {
            let alias = alias.into();
            let needle = alias.trim().to_lowercase();
            if needle.is_empty() || set.needles.contains(&needle) {
                continue;
            }
            set.aliases.push(alias);
            set.needles.push(needle);
        }

        set
    }

    /// Whether `text` contains any alias, ignoring case.
    ///
    /// Plain substring containment: no word boundaries are required.
    pub fn matches(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.needles
            .iter()
            .any(|needle| haystack.contains(needle.as_str()))
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Canonical party name to alias set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasTable {
    parties: BTreeMap<String, AliasSet>,
}

impl AliasTable {
    /// Builds a table, failing if any party ends up without aliases.
    pub fn new<I, S, A>(entries: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = (S, A)>,
        S: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let mut parties = BTreeMap::new();

        for (party, aliases) in entries {
            let party = party.into();
            let set = AliasSet::new(aliases);
            if set.is_empty() {
                return Err(AnalysisError::EmptyAliasSet { party });
            }
            parties.insert(party, set);
        }

        Ok(Self { parties })
    }

    /// Looks up the table entry for a canonical name.
    ///
    /// Returns the stored key alongside the set so callers can borrow it.
    pub fn get(&self, party: &str) -> Option<(&str, &AliasSet)> {
        self.parties
            .get_key_value(party)
            .map(|(name, set)| (name.as_str(), set))
    }

    pub fn contains(&self, party: &str) -> bool {
        self.parties.contains_key(party)
    }

    /// Entries in canonical-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AliasSet)> {
        self.parties.iter().map(|(name, set)| (name.as_str(), set))
    }
}

/// The House of Commons parties and the ways members refer to them.
const DEFAULT_ALIASES: &[(&str, &[&str])] = &[
    ("Conservative", &["Conservative", "Tory", "Tories"]),
    ("Labour", &["Labour", "Lab"]),
    (
        "Liberal Democrat",
        &["Liberal Democrat", "Lib Dem", "Lib Dems", "LibDem"],
    ),
    ("Scottish National Party", &["SNP", "Scottish National Party"]),
    (
        "Democratic Unionist Party",
        &["DUP", "Democratic Unionist Party"],
    ),
    ("Sinn Féin", &["Sinn Féin", "Sinn Fein", "SF"]),
    ("Plaid Cymru", &["Plaid Cymru", "Plaid"]),
    ("Green Party", &["Green Party", "Green"]),
    ("The Reclaim Party", &["Reclaim"]),
    ("Alliance", &["Alliance"]),
    (
        "Social Democratic & Labour Party",
        &["SDLP", "Social Democratic & Labour Party"],
    ),
    ("Alba Party", &["Alba"]),
];

/// The default alias table as an owned map, suitable for configuration files.
pub fn default_aliases() -> BTreeMap<String, Vec<String>> {
    DEFAULT_ALIASES
        .iter()
        .map(|(party, aliases)| {
            (
                party.to_string(),
                aliases.iter().map(|alias| alias.to_string()).collect(),
            )
        })
        .collect()
}

impl Default for AliasTable {
    fn default() -> Self {
        let parties = default_aliases()
            .into_iter()
            .map(|(party, aliases)| (party, AliasSet::new(aliases)))
            .collect();
        Self { parties }
    }
}
