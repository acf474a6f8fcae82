//! Data models for the party pride report.
//!
//! This module contains the input records, the validated legislator view,
//! and the per-party aggregate structures consumed by the report renderers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A raw member record as it appears in the input dataset.
///
/// Required fields are optional at the wire level so that a missing field
/// is reported with the record index instead of an opaque parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Display name of the member.
    #[serde(default)]
    pub name: Option<String>,
    /// Party label exactly as published by the source.
    #[serde(default)]
    pub party: Option<String>,
    /// Constituency the member represents.
    #[serde(default)]
    pub constituency: Option<String>,
    /// Free-text social media biography.
    #[serde(default)]
    pub description: Option<String>,
    /// Social media handle, without the leading `@`.
    #[serde(default)]
    pub twitter_username: Option<String>,
}

/// A validated legislator with its party label resolved to a canonical name.
///
/// Always a derived copy; the input records are never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legislator {
    pub name: String,
    /// Canonical party name.
    pub party: String,
    pub constituency: String,
    /// Biography text. `None` when absent or empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_handle: Option<String>,
}

/// How a legislator presents their party in their biography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Biography mentions the party.
    Proud,
    /// Biography exists but never mentions the party.
    Shy,
    /// No biography at all.
    Invisible,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 3] = [Category::Proud, Category::Shy, Category::Invisible];

    /// Heading used for the category's table in the report.
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Proud => "Proud",
            Category::Shy => "Shy",
            Category::Invisible => "Not on Twitter",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Proud => write!(f, "Proud"),
            Category::Shy => write!(f, "Shy"),
            Category::Invisible => write!(f, "Invisible"),
        }
    }
}

/// Per-party aggregate of counts and categorized members.
///
/// `total` always equals the sum of the three member lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyBucket {
    /// Canonical party name.
    pub name: String,
    pub total: usize,
    pub proud: Vec<Legislator>,
    pub shy: Vec<Legislator>,
    pub invisible: Vec<Legislator>,
}

impl PartyBucket {
    /// Creates an empty bucket for a party.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total: 0,
            proud: Vec::new(),
            shy: Vec::new(),
            invisible: Vec::new(),
        }
    }

    /// Appends a legislator to the given category, keeping encounter order.
    pub fn push(&mut self, category: Category, legislator: Legislator) {
        self.total += 1;
        match category {
            Category::Proud => self.proud.push(legislator),
            Category::Shy => self.shy.push(legislator),
            Category::Invisible => self.invisible.push(legislator),
        }
    }

    /// Members of the given category, in input order.
    pub fn members(&self, category: Category) -> &[Legislator] {
        match category {
            Category::Proud => &self.proud,
            Category::Shy => &self.shy,
            Category::Invisible => &self.invisible,
        }
    }

    /// Number of members in the given category.
    pub fn count(&self, category: Category) -> usize {
        self.members(category).len()
    }
}

/// The complete result of one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateResult {
    /// Buckets keyed by canonical party name.
    pub parties: BTreeMap<String, PartyBucket>,
    /// Every party, largest first, ties broken alphabetically.
    pub order: Vec<String>,
    /// The subset of `order` large enough for the summary table.
    pub summary_order: Vec<String>,
    /// Records read from the input.
    pub members_read: usize,
    /// Records dropped because of an excluded party status.
    pub skipped: usize,
}

impl AggregateResult {
    /// Buckets in full presentation order.
    pub fn ordered(&self) -> impl Iterator<Item = &PartyBucket> {
        self.order.iter().filter_map(|name| self.parties.get(name))
    }

    /// Buckets shown in the summary table, in presentation order.
    pub fn summary(&self) -> impl Iterator<Item = &PartyBucket> {
        self.summary_order
            .iter()
            .filter_map(|name| self.parties.get(name))
    }

    /// Number of legislators counted across all parties.
    pub fn counted(&self) -> usize {
        self.parties.values().map(|bucket| bucket.total).sum()
    }
}
