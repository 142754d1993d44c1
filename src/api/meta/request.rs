// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Meta API request types

use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::errors::ApiError;
use crate::api::lax_int;
use crate::api::pipeline::validate_target_url;

/// Request body for POST /meta
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaRequest {
    /// Page to analyse (absolute http/https URL)
    pub url: String,

    /// Maximum keywords to return (default 10, values <= 0 return none)
    #[serde(default = "default_max_keywords", deserialize_with = "lax_int::deserialize")]
    pub max_keywords: i64,
}

fn default_max_keywords() -> i64 {
    10
}

impl MetaRequest {
    /// Validate the request and return the parsed target URL
    pub fn validate(&self) -> Result<Url, ApiError> {
        validate_target_url(&self.url)
    }

    /// Keyword limit with negative values clamped to zero
    pub fn keyword_limit(&self) -> usize {
        usize::try_from(self.max_keywords).unwrap_or(0)
    }
}
