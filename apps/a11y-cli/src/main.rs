//! One-shot accessibility audit from the command line.
//!
//! Takes a page URL, a sitemap URL, or a local sitemap file, audits every
//! listed page, and writes the `URL,Issue` CSV report.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use a11y_engine::AuditEngine;
use site_crawler::{audit_pages, extract_sitemap_urls, write_csv, PageFetcher, DEFAULT_TIMEOUT_MS};

#[derive(Parser, Debug)]
#[command(name = "a11y-cli")]
#[command(about = "Audit a page or a whole sitemap and write a CSV report")]
struct Args {
    /// Page URL, sitemap URL (ending in .xml), or local sitemap file path
    input: String,

    /// Output CSV path
    #[arg(short, long, default_value = "accessibility_report.csv")]
    output: PathBuf,

    /// Per-page fetch timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

async fn resolve_urls(fetcher: &PageFetcher, input: &str) -> Result<Vec<String>> {
    if input.starts_with("http://") || input.starts_with("https://") {
        if input.ends_with(".xml") {
            let xml = fetcher
                .fetch(input)
                .await
                .context("failed to fetch sitemap")?;
            return extract_sitemap_urls(&xml).context("failed to parse sitemap");
        }
        return Ok(vec![input.to_string()]);
    }

    let xml = fs::read_to_string(input)
        .with_context(|| format!("failed to read sitemap file {input}"))?;
    extract_sitemap_urls(&xml).context("failed to parse sitemap")
}

#[tokio::main]
async fn main() -> Result<()> {
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

    let fetcher = PageFetcher::new(Duration::from_millis(args.timeout_ms))?;
    let engine = AuditEngine::new();

    let urls = resolve_urls(&fetcher, &args.input).await?;
    info!(pages = urls.len(), "starting audit");

    let report = audit_pages(&fetcher, &engine, &urls).await;

    let file = fs::File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    write_csv(&report, file)?;

    info!(
        issues = report.issue_count(),
        output = %args.output.display(),
        "report written"
    );
    Ok(())
}
