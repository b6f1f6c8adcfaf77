//! Crawl orchestration: fetch each page, run the engine, collect outcomes

use a11y_engine::AuditEngine;
use a11y_types::{AuditReport, PageOutcome, PageReport};
use tracing::{info, warn};

use crate::fetch::PageFetcher;

/// Audit each URL in submission order. A failed fetch becomes a synthetic
/// outcome for that URL and never aborts the rest of the batch.
pub async fn audit_pages(
    fetcher: &PageFetcher,
    engine: &AuditEngine,
    urls: &[String],
) -> AuditReport {
    let mut pages = Vec::with_capacity(urls.len());

    for url in urls {
        let outcome = match fetcher.fetch(url).await {
            Ok(html) => {
                let issues = engine.check_html(&html, url);
                info!(url = %url, issues = issues.len(), "page audited");
                PageOutcome::Audited(issues)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "fetch failed");
                PageOutcome::FetchError(e.to_string())
            }
        };
        pages.push(PageReport {
            url: url.clone(),
            outcome,
        });
    }

    AuditReport {
        pages,
        checked_at: chrono::Utc::now().timestamp() as u64,
    }
}
