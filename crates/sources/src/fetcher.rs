//! HTTP page fetching.
//!
//! One outbound GET per call, with a fixed identifying User-Agent and a
//! per-request timeout. Failures come back as a typed `FetchError` so
//! callers can tell a timeout from a bad status from a transport error.

use std::time::Duration;

use mamabot_core::config::USER_AGENT;
use thiserror::Error;
use url::Url;

use crate::extract::{extract_title, truncate_page_text, visible_text};

/// A successfully fetched and sanitized page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub title: String,
    pub text: String,
}

/// Page fetch error types.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// URL could not be parsed or uses a non-http(s) scheme
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Request timed out
    #[error("timeout fetching {0}")]
    Timeout(String),

    /// Transport-level HTTP error
    #[error("http error: {0}")]
    Http(String),

    /// Non-success HTTP status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body could not be read or decoded
    #[error("failed to read body: {0}")]
    Body(String),
}

/// Fetches pages and converts them to bounded plain-text excerpts.
pub struct PageFetcher {
    client: reqwest::Client,
    page_text_cap: usize,
}

impl PageFetcher {
    /// Create a fetcher with the given per-request timeout and text cap.
    pub fn new(timeout_secs: u64, page_text_cap: usize) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self {
            client,
            page_text_cap,
        })
    }

    /// Fetch a URL and return its title and bounded visible text.
    ///
    /// Title falls back to the URL when the page has no `<title>`.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        validate_url(url)?;

        tracing::debug!("Fetching {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        let title = extract_title(&html).unwrap_or_else(|| url.to_string());
        let text = truncate_page_text(&visible_text(&html), self.page_text_cap);

        tracing::info!("Fetched {} chars from {}", text.len(), url);

        Ok(FetchedPage {
            url: url.to_string(),
            title,
            text,
        })
    }
}

/// Reject anything that is not an absolute http(s) URL.
fn validate_url(url: &str) -> Result<(), FetchError> {
    let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

    if !["http", "https"].contains(&parsed.scheme()) {
        return Err(FetchError::InvalidUrl(url.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(validate_url("https://www.cdc.gov/").is_ok());
        assert!(validate_url("http://example.org/page").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_other_schemes() {
        assert!(matches!(
            validate_url("ftp://example.org/file"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_url("file:///etc/passwd"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_validate_url_rejects_relative() {
        assert!(matches!(
            validate_url("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_no_network() {
        let fetcher = PageFetcher::new(10, 3000).unwrap();
        let result = fetcher.fetch("javascript:alert(1)").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Status {
            status: 404,
            url: "https://example.org/".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 for https://example.org/");
    }
}
