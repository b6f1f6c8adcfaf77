#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Issue {
    pub message: String,
}

impl Issue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// What happened to one submitted URL.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PageOutcome {
    /// The page was fetched and the full check battery ran.
    Audited(Vec<Issue>),
    /// The fetch failed; the description replaces the per-page issues.
    FetchError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageReport {
    pub url: String,
    pub outcome: PageOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuditReport {
    pub pages: Vec<PageReport>,
    pub checked_at: u64,
}

impl AuditReport {
    /// Total issue rows this report will produce (fetch errors count as one).
    pub fn issue_count(&self) -> usize {
        self.pages
            .iter()
            .map(|p| match &p.outcome {
                PageOutcome::Audited(issues) => issues.len(),
                PageOutcome::FetchError(_) => 1,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_count_mixes_audited_and_failed_pages() {
        let report = AuditReport {
            pages: vec![
                PageReport {
                    url: "http://a.test/".to_string(),
                    outcome: PageOutcome::Audited(vec![
                        Issue::new("Missing or empty <title> tag in <head>."),
                        Issue::new("Missing 'lang' attribute in the <html> tag."),
                    ]),
                },
                PageReport {
                    url: "http://b.test/".to_string(),
                    outcome: PageOutcome::FetchError("connection refused".to_string()),
                },
            ],
            checked_at: 0,
        };
        assert_eq!(report.issue_count(), 3);
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = AuditReport {
            pages: vec![PageReport {
                url: "http://a.test/".to_string(),
                outcome: PageOutcome::Audited(vec![]),
            }],
            checked_at: 1_700_000_000,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: AuditReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
