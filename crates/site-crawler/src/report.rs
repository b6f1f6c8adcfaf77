//! CSV report serialization: header `URL,Issue`, one row per finding

use std::io;

use a11y_types::{AuditReport, PageOutcome};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("report was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Rows follow engine-output order within a page and submission order
/// across pages. A fetch failure contributes exactly one row.
pub fn write_csv<W: io::Write>(report: &AuditReport, out: W) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["URL", "Issue"])?;

    for page in &report.pages {
        match &page.outcome {
            PageOutcome::Audited(issues) => {
                for issue in issues {
                    writer.write_record([page.url.as_str(), issue.message.as_str()])?;
                }
            }
            PageOutcome::FetchError(description) => {
                let message = format!("Fetch Error: {description}");
                writer.write_record([page.url.as_str(), message.as_str()])?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

pub fn csv_string(report: &AuditReport) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    write_csv(report, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_types::{Issue, PageReport};
    use pretty_assertions::assert_eq;

    fn report(pages: Vec<PageReport>) -> AuditReport {
        AuditReport {
            pages,
            checked_at: 0,
        }
    }

    #[test]
    fn writes_header_and_one_row_per_issue() {
        let report = report(vec![PageReport {
            url: "http://x.test/a".to_string(),
            outcome: PageOutcome::Audited(vec![
                Issue::new("Missing or empty <title> tag in <head>."),
                Issue::new("Missing 'lang' attribute in the <html> tag."),
            ]),
        }]);

        let csv = csv_string(&report).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "URL,Issue");
        assert_eq!(lines[1], "http://x.test/a,Missing or empty <title> tag in <head>.");
        assert_eq!(lines[2], "http://x.test/a,Missing 'lang' attribute in the <html> tag.");
    }

    #[test]
    fn clean_page_contributes_no_rows() {
        let report = report(vec![PageReport {
            url: "http://x.test/a".to_string(),
            outcome: PageOutcome::Audited(vec![]),
        }]);

        let csv = csv_string(&report).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn fetch_failure_becomes_a_single_synthetic_row() {
        let report = report(vec![PageReport {
            url: "http://b.test/".to_string(),
            outcome: PageOutcome::FetchError("connection refused".to_string()),
        }]);

        let csv = csv_string(&report).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "http://b.test/,Fetch Error: connection refused");
    }

    #[test]
    fn messages_containing_commas_are_quoted() {
        let report = report(vec![PageReport {
            url: "http://x.test/a".to_string(),
            outcome: PageOutcome::Audited(vec![Issue::new(
                "Image missing alt attribute: http://x.test/a.png, HTML: <img src=\"a.png\">",
            )]),
        }]);

        let csv = csv_string(&report).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].starts_with("http://x.test/a,\"Image missing alt attribute:"));
    }

    #[test]
    fn pages_stay_in_submission_order() {
        let report = report(vec![
            PageReport {
                url: "http://x.test/b".to_string(),
                outcome: PageOutcome::Audited(vec![Issue::new("first")]),
            },
            PageReport {
                url: "http://x.test/a".to_string(),
                outcome: PageOutcome::Audited(vec![Issue::new("second")]),
            },
        ]);

        let csv = csv_string(&report).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "http://x.test/b,first");
        assert_eq!(lines[2], "http://x.test/a,second");
    }
}
