//! ARIA attribute checks: empty `aria-*` values, tab order, empty roles

use a11y_types::Issue;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::Html;

use crate::selectors;

lazy_static! {
    /// One optional leading minus, then digits. Anything else is ignored.
    static ref TABINDEX_VALUE: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
}

/// Every `aria-*` attribute whose trimmed value is empty, one issue per
/// attribute. Offending names are sorted per element: attribute-map
/// iteration order is unspecified, and output order must be stable.
pub fn check_empty_aria_attributes(document: &Html) -> Vec<Issue> {
    let mut issues = Vec::new();
    for element in document.select(&selectors::ANY_ELEMENT) {
        let mut empty: Vec<&str> = element
            .value()
            .attrs()
            .filter(|(name, value)| name.starts_with("aria-") && value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();
        empty.sort_unstable();

        for name in empty {
            issues.push(Issue::new(format!(
                "{} missing value or has empty ARIA attribute '{}'",
                element.value().name(),
                name
            )));
        }
    }
    issues
}

/// Numeric `tabindex` values in document order must already be sorted.
/// Emits at most one issue for the whole page.
pub fn check_tab_order(document: &Html) -> Vec<Issue> {
    let indices: Vec<i64> = document
        .select(&selectors::TABBED)
        .filter_map(|element| element.value().attr("tabindex"))
        .filter(|value| TABINDEX_VALUE.is_match(value))
        .filter_map(|value| value.parse().ok())
        .collect();

    let mut sorted = indices.clone();
    sorted.sort_unstable();

    if !indices.is_empty() && sorted != indices {
        vec![Issue::new(
            "Tabindex values are not in logical/tab order sequence.",
        )]
    } else {
        Vec::new()
    }
}

/// Every element carrying a `role` whose trimmed value is empty.
pub fn check_empty_roles(document: &Html) -> Vec<Issue> {
    let mut issues = Vec::new();
    for element in document.select(&selectors::ROLE) {
        let role = element.value().attr("role").unwrap_or("");
        if role.trim().is_empty() {
            issues.push(Issue::new(format!(
                "{} tag has empty 'role' attribute.",
                element.value().name()
            )));
        }
    }
    issues
}
