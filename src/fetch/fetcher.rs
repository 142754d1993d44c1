// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP page fetcher
//!
//! Performs a single GET of the target URL. Transport failures and error
//! statuses are both surfaced as [`FetchError`]; nothing is retried.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use super::config::FetchConfig;

/// Raw outcome of one outbound fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// HTTP status code returned by the origin
    pub status: u16,
    /// Decoded response body
    pub body: String,
}

impl FetchResult {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Turn an error status (>= 400) into [`FetchError::HttpStatus`]
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.status >= 400 {
            return Err(FetchError::HttpStatus(self.status));
        }
        Ok(self)
    }
}

/// Errors that can occur while fetching a page
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The exchange did not finish within the configured timeout
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// DNS, connection, TLS or body decoding failure
    #[error("{0}")]
    Transport(String),

    /// Origin answered with an error status
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// Target could not be parsed as a URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Only http and https are fetched
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Source of raw page HTML
///
/// The HTTP implementation is [`HttpFetcher`]; tests substitute their own.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` once and return its status and body
    ///
    /// Any completed exchange is `Ok`, whatever its status. Callers decide
    /// what counts as a failure via [`FetchResult::error_for_status`].
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError>;
}

/// reqwest-backed fetcher with a fixed timeout and identity header
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    /// Create a new fetcher from configuration
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            FetchError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        debug!("Fetching page: {}", parsed);

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read body from {}: {}", url, e);
            self.map_reqwest_error(e)
        })?;

        debug!("Fetched {} bytes from {} (HTTP {})", body.len(), url, status);

        Ok(FetchResult { status, body })
    }
}
