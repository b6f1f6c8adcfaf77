//! Heading level order check

use a11y_types::Issue;
use scraper::Html;

use crate::selectors;

/// Walk `h1`..`h6` in document order and flag any jump of more than one
/// level. The tracked level updates after every heading, flagged or not.
pub fn check_heading_order(document: &Html) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut last_level = 0u32;

    for heading in document.select(&selectors::HEADINGS) {
        let level = heading_level(heading.value().name());
        if last_level != 0 && level > last_level + 1 {
            issues.push(Issue::new(format!(
                "Skipped heading level from h{} to h{}",
                last_level, level
            )));
        }
        last_level = level;
    }
    issues
}

fn heading_level(name: &str) -> u32 {
    name[1..].parse().unwrap_or(0)
}
