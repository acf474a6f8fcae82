//! Per-legislator classification.

use super::aliases::AliasSet;
use crate::models::Category;

/// Classifies a biography against the aliases of the member's party.
///
/// A missing biography is always `Invisible`, whatever the aliases.
pub fn classify(biography: Option<&str>, aliases: &AliasSet) -> Category {
    match biography {
        None => Category::Invisible,
        Some(text) if aliases.matches(text) => Category::Proud,
        Some(_) => Category::Shy,
    }
}
