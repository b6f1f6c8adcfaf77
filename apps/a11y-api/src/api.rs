//! HTTP handlers for the audit API

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use site_crawler::{audit_pages, csv_string, extract_sitemap_urls};

use crate::error::ApiError;
use crate::AppState;

pub const REPORT_FILENAME: &str = "accessibility_report.csv";

#[derive(Debug, Deserialize)]
pub struct AuditRequest {
    /// A page URL, or a sitemap URL ending in `.xml`.
    pub url: Option<String>,
    /// Inline sitemap XML (e.g. from a file upload).
    pub sitemap_xml: Option<String>,
}

/// Health check endpoint
pub async fn handle_health() -> &'static str {
    "OK"
}

/// Resolve a submission into the ordered URL list to audit.
pub(crate) async fn resolve_urls(
    state: &AppState,
    req: &AuditRequest,
) -> Result<Vec<String>, ApiError> {
    match (&req.url, &req.sitemap_xml) {
        (None, Some(xml)) => Ok(extract_sitemap_urls(xml)?),
        (Some(url), None) => {
            let url = url.trim();
            if url.is_empty() {
                return Err(ApiError::InvalidRequest(
                    "'url' must not be empty".to_string(),
                ));
            }
            if url.ends_with(".xml") {
                let xml = state.fetcher.fetch(url).await?;
                Ok(extract_sitemap_urls(&xml)?)
            } else {
                Ok(vec![url.to_string()])
            }
        }
        _ => Err(ApiError::InvalidRequest(
            "provide exactly one of 'url' or 'sitemap_xml'".to_string(),
        )),
    }
}

/// Audit the submitted URL(s) and return the CSV report as an attachment.
pub async fn handle_audit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AuditRequest>,
) -> Result<(StatusCode, [(String, String); 2], String), ApiError> {
    let urls = resolve_urls(&state, &req).await?;
    tracing::info!(pages = urls.len(), "audit submitted");

    let report = audit_pages(&state.fetcher, &state.engine, &urls).await;
    let csv = csv_string(&report)?;

    Ok((
        StatusCode::OK,
        [
            (
                "Content-Type".to_string(),
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                "Content-Disposition".to_string(),
                format!("attachment; filename=\"{}\"", REPORT_FILENAME),
            ),
        ],
        csv,
    ))
}
