pub mod checks;
mod selectors;

use a11y_types::Issue;
use scraper::Html;

/// AuditEngine entry point
pub struct AuditEngine;

impl AuditEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the full check battery against one page.
    ///
    /// Malformed markup degrades to a best-effort tree instead of failing,
    /// and the output order is fixed: check declaration order, document
    /// order within each check.
    pub fn check_html(&self, html: &str, base_url: &str) -> Vec<Issue> {
        let document = Html::parse_document(html);
        let mut issues = Vec::new();

        issues.extend(checks::metadata::check_title(&document));
        issues.extend(checks::metadata::check_document_language(&document));
        issues.extend(checks::images::check_image_alt_text(&document, base_url));
        issues.extend(checks::forms::check_form_labels(&document));
        issues.extend(checks::headings::check_heading_order(&document));
        issues.extend(checks::aria::check_empty_aria_attributes(&document));
        issues.extend(checks::aria::check_tab_order(&document));
        issues.extend(checks::aria::check_empty_roles(&document));
        issues.extend(checks::landmarks::check_landmark_regions(&document));

        issues
    }
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new()
    }
}
