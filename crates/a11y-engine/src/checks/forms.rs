//! Form control labeling check

use std::collections::HashSet;

use a11y_types::Issue;
use scraper::Html;

use crate::selectors;

/// Control types that never need a visible label.
const UNLABELED_TYPES: &[&str] = &["hidden", "button", "submit", "reset"];

/// Every `input`/`select`/`textarea` (outside the skip list) must have an
/// `id` referenced by some `label[for]` in the document.
pub fn check_form_labels(document: &Html) -> Vec<Issue> {
    let labeled_ids: HashSet<&str> = document
        .select(&selectors::LABEL)
        .filter_map(|label| label.value().attr("for"))
        .collect();

    let mut issues = Vec::new();
    for control in document.select(&selectors::FORM_CONTROLS) {
        if let Some(ty) = control.value().attr("type") {
            if UNLABELED_TYPES.contains(&ty) {
                continue;
            }
        }

        let labeled = control
            .value()
            .attr("id")
            .map(|id| labeled_ids.contains(id))
            .unwrap_or(false);

        if !labeled {
            issues.push(Issue::new(format!(
                "Form element missing label: {}...",
                control.html()
            )));
        }
    }
    issues
}
