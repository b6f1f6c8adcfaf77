//! Page fetching with a per-request timeout

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

const USER_AGENT: &str = concat!("a11y-audit/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// HTTP client wrapper used for pages and remote sitemaps.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Body text regardless of HTTP status; only transport failures and
    /// timeouts are errors. Error pages still get audited upstream.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_any_timeout() {
        assert!(PageFetcher::new(Duration::from_millis(1)).is_ok());
        assert!(PageFetcher::new(Duration::from_secs(60)).is_ok());
    }
}
