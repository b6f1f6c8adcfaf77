//! Error types for the audit API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use site_crawler::{FetchError, ReportError, SitemapError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Sitemap parse failed: {0}")]
    Sitemap(#[from] SitemapError),

    #[error("Sitemap fetch failed: {0}")]
    SitemapFetch(#[from] FetchError),

    #[error("Report serialization failed: {0}")]
    Report(#[from] ReportError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Sitemap(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::SitemapFetch(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            ApiError::Report(e) => {
                tracing::error!("report serialization error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Report serialization failed".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
