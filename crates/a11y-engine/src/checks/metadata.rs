//! Document metadata checks: page title and declared language

use a11y_types::Issue;
use scraper::Html;

use crate::selectors;

/// A page needs a `<title>` with non-whitespace text.
pub fn check_title(document: &Html) -> Vec<Issue> {
    let has_title = document
        .select(&selectors::TITLE)
        .next()
        .map(|title| !title.text().collect::<String>().trim().is_empty())
        .unwrap_or(false);

    if has_title {
        Vec::new()
    } else {
        vec![Issue::new("Missing or empty <title> tag in <head>.")]
    }
}

/// Presence-only check: `lang=""` still counts as declared.
pub fn check_document_language(document: &Html) -> Vec<Issue> {
    let mut issues = Vec::new();
    if let Some(root) = document.select(&selectors::HTML_ROOT).next() {
        if root.value().attr("lang").is_none() {
            issues.push(Issue::new("Missing 'lang' attribute in the <html> tag."));
        }
    }
    issues
}
