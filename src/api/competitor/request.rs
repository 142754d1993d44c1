// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Competitor API request types

use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::errors::ApiError;
use crate::api::lax_int;
use crate::api::pipeline::validate_target_url;

/// Request body for POST /competitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorRequest {
    /// Competitor page to analyse (absolute http/https URL)
    pub url: String,

    /// Maximum keywords to return (default 12)
    #[serde(default = "default_max_keywords", deserialize_with = "lax_int::deserialize")]
    pub max_keywords: i64,
}

fn default_max_keywords() -> i64 {
    12
}

impl CompetitorRequest {
    /// Validate the request and return the parsed target URL
    pub fn validate(&self) -> Result<Url, ApiError> {
        validate_target_url(&self.url)
    }

    /// Keyword limit with negative values clamped to zero
    pub fn keyword_limit(&self) -> usize {
        usize::try_from(self.max_keywords).unwrap_or(0)
    }
}
