//! The I/O collaborators around the accessibility rule engine: sitemap
//! ingestion, page fetching, crawl orchestration, and CSV report output.

pub mod crawl;
pub mod fetch;
pub mod report;
pub mod sitemap;

pub use crawl::audit_pages;
pub use fetch::{FetchError, PageFetcher, DEFAULT_TIMEOUT_MS};
pub use report::{csv_string, write_csv, ReportError};
pub use sitemap::{extract_sitemap_urls, SitemapError};
