//! Image alternative-text check

use a11y_types::Issue;
use scraper::Html;
use url::Url;

use crate::selectors;

/// Every `img` whose `alt` is absent or empty, with its `src` resolved
/// against the page URL.
pub fn check_image_alt_text(document: &Html, base_url: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    for img in document.select(&selectors::IMG) {
        let alt = img.value().attr("alt").unwrap_or("");
        if alt.is_empty() {
            let src = img.value().attr("src").unwrap_or("");
            issues.push(Issue::new(format!(
                "Image missing alt attribute: {}, HTML: {}",
                resolve_src(base_url, src),
                img.html()
            )));
        }
    }
    issues
}

/// Standard relative-URL resolution; an unparseable base degrades to the
/// raw src rather than losing the finding.
fn resolve_src(base_url: &str, src: &str) -> String {
    match Url::parse(base_url).and_then(|base| base.join(src)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => src.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_src_against_page_url() {
        let doc = Html::parse_document(r#"<body><img src="a.png"></body>"#);
        let issues = check_image_alt_text(&doc, "http://x.test/dir/page.html");
        assert_eq!(issues.len(), 1);
        assert!(issues[0]
            .message
            .starts_with("Image missing alt attribute: http://x.test/dir/a.png"));
        assert!(issues[0].message.contains("HTML: <img src=\"a.png\">"));
    }

    #[test]
    fn absolute_src_passes_through_unchanged() {
        let doc = Html::parse_document(r#"<body><img src="http://cdn.test/i.png"></body>"#);
        let issues = check_image_alt_text(&doc, "http://x.test/");
        assert!(issues[0]
            .message
            .contains("Image missing alt attribute: http://cdn.test/i.png"));
    }

    #[test]
    fn missing_src_resolves_to_the_base_itself() {
        let doc = Html::parse_document("<body><img></body>");
        let issues = check_image_alt_text(&doc, "http://x.test/dir/page.html");
        assert_eq!(issues.len(), 1);
        assert!(issues[0]
            .message
            .contains("Image missing alt attribute: http://x.test/dir/page.html"));
    }

    #[test]
    fn empty_alt_is_flagged_but_text_alt_is_not() {
        let doc = Html::parse_document(
            r#"<body><img alt="" src="a.png"><img alt="a picture" src="b.png"></body>"#,
        );
        let issues = check_image_alt_text(&doc, "http://x.test/");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("a.png"));
    }

    #[test]
    fn flags_every_offending_image_in_document_order() {
        let doc = Html::parse_document(r#"<body><img src="1.png"><img src="2.png"></body>"#);
        let issues = check_image_alt_text(&doc, "http://x.test/");
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("1.png"));
        assert!(issues[1].message.contains("2.png"));
    }
}
