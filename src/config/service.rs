// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration
//!
//! Built from command-line flags, which fall back to `SEO_META_*`
//! environment variables (optionally loaded from `.env`).

use crate::fetch::FetchConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Top-level configuration for the HTTP service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Interface to bind (default: 127.0.0.1)
    pub host: String,
    /// Port to bind (default: 8000)
    pub port: u16,
    /// Outbound fetch settings
    pub fetch: FetchConfig,
}

impl ServiceConfig {
    /// Address to bind, as accepted by `TcpListener::bind`
    pub fn listen_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host cannot be empty".to_string());
        }
        self.fetch.validate()
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            fetch: FetchConfig::default(),
        }
    }
}
