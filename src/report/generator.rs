//! Markdown report generation.
//!
//! Renders the summary table and the per-party results section, and
//! splices both into a template document.

use super::template::splice;
use crate::config::ReportConfig;
use crate::models::{AggregateResult, Category, Legislator, PartyBucket};
use anyhow::Result;

/// Render both sections and splice them into `template`.
pub fn generate_markdown_report(
    result: &AggregateResult,
    template: &str,
    config: &ReportConfig,
) -> Result<String> {
    let summary = generate_summary_section(result);
    let results = generate_results_section(result, &config.profile_url_base);

    let document = splice(
        template,
        &config.summary_begin_marker,
        &config.summary_end_marker,
        &summary,
    )?;
    let document = splice(
        &document,
        &config.results_begin_marker,
        &config.results_end_marker,
        &results,
    )?;

    Ok(document)
}

/// Generate the summary table over the parties large enough to be listed.
pub fn generate_summary_section(result: &AggregateResult) -> String {
    let mut section = String::from("\n");

    section.push_str("| Party | # of MPs | # of MPs mentioning their party | # of MPs not mentioning their party | # of MPs not on Twitter |\n");
    section.push_str("| - | - | - | - | - |\n");

    for bucket in result.summary() {
        section.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            bucket.name,
            bucket.total,
            bucket.count(Category::Proud),
            bucket.count(Category::Shy),
            bucket.count(Category::Invisible)
        ));
    }

    section
}

/// Generate the collapsible per-party results for every party.
pub fn generate_results_section(result: &AggregateResult, profile_url_base: &str) -> String {
    let mut section = String::from("\n");

    for bucket in result.ordered() {
        section.push_str(&render_details(
            &bucket.name,
            &generate_party_section(bucket, profile_url_base),
        ));
        section.push_str("<br>");
    }

    section
}

/// Generate the category tables for one party, skipping empty categories.
fn generate_party_section(bucket: &PartyBucket, profile_url_base: &str) -> String {
    let mut section = String::new();

    for category in Category::ALL {
        let members = bucket.members(category);
        if members.is_empty() {
            continue;
        }

        let table = match category {
            Category::Proud | Category::Shy => bio_table(members, profile_url_base),
            Category::Invisible => name_table(members),
        };
        let heading = format!("{} ({} of {})", category.heading(), members.len(), bucket.total);

        section.push_str(&render_details(&heading, &table));
    }

    section
}

fn bio_table(members: &[Legislator], profile_url_base: &str) -> String {
    let mut table = String::from("| Name | Constituency | Bio |\n");
    table.push_str("| - | - | - |\n");

    for member in members {
        let name = match member.social_handle {
            Some(ref handle) => format!("[{}]({}{})", member.name, profile_url_base, handle),
            None => member.name.clone(),
        };
        table.push_str(&format!(
            "| {} | {} | {} |\n",
            name,
            member.constituency,
            sanitise_bio(member.biography.as_deref().unwrap_or_default())
        ));
    }

    table
}

fn name_table(members: &[Legislator]) -> String {
    let mut table = String::from("| Name | Constituency |\n");
    table.push_str("| - | - |\n");

    for member in members {
        table.push_str(&format!("| {} | {} |\n", member.name, member.constituency));
    }

    table
}

fn render_details(summary: &str, details: &str) -> String {
    format!("<details>\n<summary>{}</summary>\n\n{}\n</details>\n", summary, details)
}

/// Keep a bio on one table row.
fn sanitise_bio(bio: &str) -> String {
    bio.replace("\r\n", "\n")
        .replace('\n', "<br>")
        .replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{aggregate, PartyNormalizer};
    use crate::models::Member;

    fn member(name: &str, party: &str, bio: Option<&str>, handle: Option<&str>) -> Member {
        Member {
            name: Some(name.to_string()),
            party: Some(party.to_string()),
            constituency: Some(format!("{} West", name)),
            description: bio.map(String::from),
            twitter_username: handle.map(String::from),
        }
    }

    fn sample_result(min_total: usize) -> AggregateResult {
        let members = vec![
            member("Ann", "Labour", Some("Labour MP\nMum | runner"), Some("ann_mp")),
            member("Bob", "Labour", Some("MP for Bob West"), Some("bob")),
            member("Cat", "Labour", None, None),
            member("Dan", "Green Party", Some("Green MP"), None),
        ];
        aggregate(&members, &PartyNormalizer::default(), min_total).unwrap()
    }

    #[test]
    fn test_summary_only_lists_large_parties() {
        let summary = generate_summary_section(&sample_result(2));

        assert!(summary.starts_with("\n| Party | # of MPs |"));
        assert!(summary.contains("| Labour | 3 | 1 | 1 | 1 |\n"));
        assert!(!summary.contains("Green Party"));
    }

    #[test]
    fn test_results_list_every_party() {
        let results = generate_results_section(&sample_result(2), "https://twitter.com/");

        let labour = results.find("<summary>Labour</summary>").unwrap();
        let green = results.find("<summary>Green Party</summary>").unwrap();
        assert!(labour < green);
        assert!(results.contains("<summary>Proud (1 of 3)</summary>"));
        assert!(results.contains("<summary>Not on Twitter (1 of 3)</summary>"));
        assert!(!results.contains("Shy (0 of 1)"));
        assert!(results.ends_with("</details>\n<br>"));
    }

    #[test]
    fn test_bio_rows() {
        let results = generate_results_section(&sample_result(2), "https://twitter.com/");

        assert!(results
            .contains("| [Ann](https://twitter.com/ann_mp) | Ann West | Labour MP<br>Mum \\| runner |"));
        assert!(results.contains("| Dan | Dan West | Green MP |"));
        assert!(results.contains("| Cat | Cat West |\n"));
    }

    #[test]
    fn test_generate_markdown_report() {
        let template = "# MPs\n<!--summary-auto-gen-begin-->old<!--summary-auto-gen-end-->\n\
                        <!--results-auto-gen-begin--><!--results-auto-gen-end-->\n";
        let report =
            generate_markdown_report(&sample_result(2), template, &ReportConfig::default()).unwrap();

        assert!(report.starts_with("# MPs\n<!--summary-auto-gen-begin-->\n| Party"));
        assert!(!report.contains("old"));
        assert!(report.contains("<br><!--results-auto-gen-end-->\n"));
    }

    #[test]
    fn test_missing_marker_fails() {
        let result = generate_markdown_report(
            &sample_result(2),
            "no markers here",
            &ReportConfig::default(),
        );
        assert!(result.is_err());
    }
}
