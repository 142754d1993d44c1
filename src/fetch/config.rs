// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for outbound page fetches

use std::time::Duration;

/// Default timeout for a single page fetch
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default identity header sent with every fetch
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Default cap on followed redirects
pub const DEFAULT_MAX_REDIRECTS: usize = 30;

/// Settings for the HTTP fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Timeout for the whole exchange in seconds (default: 10)
    pub timeout_secs: u64,
    /// `User-Agent` header value (default: "Mozilla/5.0")
    pub user_agent: String,
    /// Maximum redirects followed before giving up (default: 30)
    pub max_redirects: usize,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("fetch timeout must be at least 1 second".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user agent cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}
