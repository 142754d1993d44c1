// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared request pipeline: validate → fetch → parse
//!
//! Both `/meta` and `/competitor` run the same steps before diverging in how
//! they assemble the response.

use tracing::{debug, warn};
use url::Url;

use super::errors::ApiError;
use crate::extract::PageDocument;
use crate::fetch::{FetchResult, PageFetcher};

/// Longest target URL accepted
pub const MAX_URL_LENGTH: usize = 2083;

fn invalid_url(message: impl Into<String>) -> ApiError {
    ApiError::ValidationError {
        field: "url".to_string(),
        message: message.into(),
    }
}

/// Parse and validate the target URL of a request
///
/// Accepts absolute http/https URLs with a host.
pub fn validate_target_url(raw: &str) -> Result<Url, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(invalid_url("URL cannot be empty"));
    }
    if raw.len() > MAX_URL_LENGTH {
        return Err(invalid_url(format!(
            "URL too long (max {} characters)",
            MAX_URL_LENGTH
        )));
    }

    let url = Url::parse(raw)
        .map_err(|e| invalid_url(format!("Input should be a valid URL, {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid_url("URL scheme should be 'http' or 'https'"));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid_url("URL must have a host"));
    }

    Ok(url)
}

/// Fetch `url` once and parse the page
///
/// Transport errors and statuses >= 400 abort before any parsing happens.
pub async fn load_page(fetcher: &dyn PageFetcher, url: &Url) -> Result<PageDocument, ApiError> {
    let result = fetcher
        .fetch(url.as_str())
        .await
        .and_then(FetchResult::error_for_status)
        .map_err(|e| {
            warn!("Fetch failed for {}: {}", url, e);
            ApiError::from(e)
        })?;

    let page = PageDocument::parse(&result.body);
    debug!(
        "Parsed {} (title: {}, h1: {}, {} text chars)",
        url,
        page.title.is_some(),
        page.first_heading.is_some(),
        page.text.len()
    );

    Ok(page)
}
