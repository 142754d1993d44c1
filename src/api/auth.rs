// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! API key presence check
//!
//! Keys are validated by the upstream proxy; this service only requires
//! that one was forwarded.

use axum::http::HeaderMap;
use tracing::warn;

use super::errors::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// A forwarded, non-empty `x-api-key` value
#[derive(Clone)]
pub struct ApiKey(pub String);

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Require a non-empty `x-api-key` header
///
/// Handlers call this after the request body has been validated and before
/// any outbound fetch, so body errors surface as 422 and a missing key never
/// triggers a fetch.
pub fn require_api_key(headers: &HeaderMap) -> Result<ApiKey, ApiError> {
    match headers.get(API_KEY_HEADER) {
        Some(value) if !value.is_empty() => Ok(ApiKey(
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        )),
        _ => {
            warn!("Rejected request: missing {}", API_KEY_HEADER);
            Err(ApiError::Unauthorized(format!("Missing {}", API_KEY_HEADER)))
        }
    }
}
