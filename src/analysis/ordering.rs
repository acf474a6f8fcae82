//! Deterministic party ordering.
//!
//! Parties are presented largest first. Equal-sized parties are ordered by
//! name the way a reader expects, not by byte value.

use crate::models::PartyBucket;
use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Orders every party by total descending, then by name.
pub fn order_parties(parties: &BTreeMap<String, PartyBucket>) -> Vec<String> {
    let mut collator = root_collator();
    let mut buckets: Vec<&PartyBucket> = parties.values().collect();
    buckets.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| collator.collate(a.name.as_str(), b.name.as_str()))
    });
    buckets.into_iter().map(|bucket| bucket.name.clone()).collect()
}

/// Keeps the parties of `order` with at least `min_total` members, preserving order.
pub fn summary_view(
    order: &[String],
    parties: &BTreeMap<String, PartyBucket>,
    min_total: usize,
) -> Vec<String> {
    order
        .iter()
        .filter(|name| {
            parties
                .get(name.as_str())
                .is_some_and(|bucket| bucket.total >= min_total)
        })
        .cloned()
        .collect()
}

/// Unicode Collation Algorithm with the CLDR root tables.
///
/// Punctuation and spaces are non-ignorable, as in ICU's default. Identical
/// collation keys fall back to code point order, so the result is total.
fn root_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

/// Compares names letters first, then accents, then case.
///
/// "Łódź" sorts between "L" and "M", "Ø" between "O" and "P".
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    root_collator().collate(a, b)
}
