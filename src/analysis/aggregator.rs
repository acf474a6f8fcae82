//! Member aggregation and per-party statistics.
//!
//! Folds the member list into per-party buckets in one pass, then derives
//! the presentation order of the parties.

use super::classifier::classify;
use super::normalizer::{Normalized, PartyNormalizer};
use super::ordering::{order_parties, summary_view};
use crate::error::AnalysisError;
use crate::models::{AggregateResult, Category, Legislator, Member, PartyBucket};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Aggregates members into party buckets.
///
/// Aborts on the first malformed record or unknown party; no partial
/// result is returned. Records with an excluded status are dropped before
/// any field other than `party` is looked at. Members keep their input
/// order within a category.
pub fn aggregate(
    members: &[Member],
    normalizer: &PartyNormalizer,
    summary_min_total: usize,
) -> Result<AggregateResult, AnalysisError> {
    let mut parties: BTreeMap<String, PartyBucket> = BTreeMap::new();
    let mut skipped = 0;

    for (index, member) in members.iter().enumerate() {
        let label = required(&member.party, index, "party")?;

        let (party, aliases) = match normalizer.normalize(label)? {
            Normalized::Party(party, aliases) => (party, aliases),
            Normalized::Excluded => {
                debug!(
                    "Skipping record {} ({})",
                    index,
                    member.name.as_deref().unwrap_or(label)
                );
                skipped += 1;
                continue;
            }
        };

        let name = required(&member.name, index, "name")?;
        let constituency = required(&member.constituency, index, "constituency")?;

        let legislator = Legislator {
            name: name.to_string(),
            party: party.to_string(),
            constituency: constituency.to_string(),
            biography: non_empty(&member.description),
            social_handle: non_empty(&member.twitter_username),
        };

        let category = classify(legislator.biography.as_deref(), aliases);

        parties
            .entry(party.to_string())
            .or_insert_with(|| PartyBucket::new(party))
            .push(category, legislator);
    }

    let order = order_parties(&parties);
    let summary_order = summary_view(&order, &parties, summary_min_total);

    let result = AggregateResult {
        parties,
        order,
        summary_order,
        members_read: members.len(),
        skipped,
    };

    info!(
        "Classified {} members across {} parties ({} skipped)",
        result.counted(),
        result.parties.len(),
        result.skipped
    );
    for bucket in result.ordered() {
        debug!(
            "{}: {} total, {} {}, {} {}, {} {}",
            bucket.name,
            bucket.total,
            bucket.count(Category::Proud),
            Category::Proud,
            bucket.count(Category::Shy),
            Category::Shy,
            bucket.count(Category::Invisible),
            Category::Invisible
        );
    }

    Ok(result)
}

fn required<'a>(
    field: &'a Option<String>,
    index: usize,
    name: &'static str,
) -> Result<&'a str, AnalysisError> {
    match field.as_deref() {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AnalysisError::MalformedInput { index, field: name }),
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field.as_deref().filter(|value| !value.is_empty()).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, party: &str, bio: Option<&str>) -> Member {
        Member {
            name: Some(name.to_string()),
            party: Some(party.to_string()),
            constituency: Some(format!("{} North", name)),
            description: bio.map(String::from),
            twitter_username: Some(name.to_lowercase()),
        }
    }

    fn names(members: &[Legislator]) -> Vec<&str> {
        members.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_single_party_scenario() {
        let members = vec![
            member("One", "Labour", Some("Proud Labour MP for X")),
            member("Two", "Labour", Some("MP for X")),
            member("Three", "Labour", None),
        ];

        let result = aggregate(&members, &PartyNormalizer::default(), 10).unwrap();
        let labour = &result.parties["Labour"];

        assert_eq!(labour.total, 3);
        assert_eq!(names(&labour.proud), vec!["One"]);
        assert_eq!(names(&labour.shy), vec!["Two"]);
        assert_eq!(names(&labour.invisible), vec!["Three"]);
        assert_eq!(result.order, vec!["Labour"]);
        assert!(result.summary_order.is_empty());
    }

    #[test]
    fn test_excluded_statuses_are_dropped() {
        let members = vec![
            member("Chair", "Speaker", Some("Speaker of the House")),
            member("Solo", "Independent", None),
            member("Red", "Labour", None),
        ];

        let result = aggregate(&members, &PartyNormalizer::default(), 10).unwrap();

        assert_eq!(result.parties.len(), 1);
        assert_eq!(result.counted(), 1);
        assert_eq!(result.skipped, 2);
        assert_eq!(result.members_read, 3);
    }

    #[test]
    fn test_co_op_merges_into_labour() {
        let members = vec![
            member("A", "Labour", None),
            member("B", "Labour (Co-op)", Some("Labour & Co-operative MP")),
        ];

        let result = aggregate(&members, &PartyNormalizer::default(), 10).unwrap();

        assert_eq!(result.parties.len(), 1);
        let labour = &result.parties["Labour"];
        assert_eq!(labour.total, 2);
        assert_eq!(labour.proud[0].party, "Labour");
    }

    #[test]
    fn test_unknown_party_aborts() {
        let members = vec![
            member("A", "Labour", None),
            member("B", "Bootleggers Party", None),
        ];

        let result = aggregate(&members, &PartyNormalizer::default(), 10);

        assert_eq!(
            result,
            Err(AnalysisError::UnknownParty {
                label: "Bootleggers Party".to_string()
            })
        );
    }

    #[test]
    fn test_excluded_record_needs_only_a_party() {
        let speaker = Member {
            name: Some("Chair".to_string()),
            party: Some("Speaker".to_string()),
            ..Member::default()
        };
        let members = vec![speaker, member("A", "Labour", None)];

        let result = aggregate(&members, &PartyNormalizer::default(), 10).unwrap();

        assert_eq!(result.counted(), 1);
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_missing_party_is_malformed() {
        let mut broken = member("A", "Labour", None);
        broken.party = None;

        let result = aggregate(&[broken], &PartyNormalizer::default(), 10);

        assert_eq!(
            result,
            Err(AnalysisError::MalformedInput {
                index: 0,
                field: "party"
            })
        );
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let mut broken = member("A", "Labour", None);
        broken.constituency = None;
        let members = vec![member("B", "Labour", None), broken];

        let result = aggregate(&members, &PartyNormalizer::default(), 10);

        assert_eq!(
            result,
            Err(AnalysisError::MalformedInput {
                index: 1,
                field: "constituency"
            })
        );
    }

    #[test]
    fn test_empty_biography_is_invisible() {
        let members = vec![member("A", "Green Party", Some(""))];

        let result = aggregate(&members, &PartyNormalizer::default(), 10).unwrap();

        assert_eq!(result.parties["Green Party"].invisible.len(), 1);
    }

    #[test]
    fn test_totals_match_categories() {
        let members = vec![
            member("A", "Conservative", Some("Tory MP")),
            member("B", "Conservative", Some("MP")),
            member("C", "Scottish National Party", Some("SNP MP")),
            member("D", "Conservative", None),
            member("E", "Scottish National Party", None),
            member("F", "Alba Party", Some("Husband, father")),
        ];

        let result = aggregate(&members, &PartyNormalizer::default(), 10).unwrap();

        for bucket in result.parties.values() {
            let sum: usize = Category::ALL.iter().map(|c| bucket.count(*c)).sum();
            assert_eq!(bucket.total, sum, "{}", bucket.name);
        }
        assert_eq!(result.counted(), members.len());
        assert_eq!(
            result.order,
            vec!["Conservative", "Scottish National Party", "Alba Party"]
        );
    }

    #[test]
    fn test_encounter_order_within_category() {
        let members = vec![
            member("Zed", "Labour", Some("Labour")),
            member("Amy", "Labour", Some("Labour")),
            member("Mo", "Labour", Some("Labour")),
        ];

        let result = aggregate(&members, &PartyNormalizer::default(), 10).unwrap();

        assert_eq!(names(&result.parties["Labour"].proud), vec!["Zed", "Amy", "Mo"]);
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let members = vec![
            member("A", "Alliance", None),
            member("B", "Alba Party", Some("Alba")),
            member("C", "Alba Party", None),
            member("D", "Alliance", Some("Alliance MP")),
        ];
        let normalizer = PartyNormalizer::default();

        let first = aggregate(&members, &normalizer, 2).unwrap();
        let second = aggregate(&members, &normalizer, 2).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.order, vec!["Alba Party", "Alliance"]);
        assert_eq!(first.summary_order, first.order);
    }
}
