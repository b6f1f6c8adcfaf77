//! Accessibility audit API server
//!
//! Accepts a page URL, a sitemap URL, or inline sitemap XML, crawls the
//! listed pages, and returns the `URL,Issue` CSV report as an attachment.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use a11y_engine::AuditEngine;
use site_crawler::{PageFetcher, DEFAULT_TIMEOUT_MS};

mod api;
mod error;

use api::{handle_audit, handle_health};

/// Command-line arguments for the audit API server
#[derive(Parser, Debug)]
#[command(name = "a11y-api")]
#[command(about = "Accessibility audit API: submit a URL or sitemap, get a CSV report")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Per-page fetch timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
pub struct AppState {
    pub fetcher: PageFetcher,
    pub engine: AuditEngine,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = Arc::new(AppState {
        fetcher: PageFetcher::new(Duration::from_millis(args.timeout_ms))?,
        engine: AuditEngine::new(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/api/audit", post(handle_audit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting a11y-api on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
