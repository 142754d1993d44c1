// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;

use crate::config::service::{DEFAULT_HOST, DEFAULT_PORT};
use crate::config::ServiceConfig;
use crate::fetch::config::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::fetch::FetchConfig;

/// SEO metadata extraction service
///
/// Each flag falls back to its `SEO_META_*` environment variable, then to
/// the built-in default.
#[derive(Parser, Debug)]
#[command(name = "seo-meta")]
#[command(version)]
#[command(about = "Fetch a page and report its SEO metadata over HTTP", long_about = None)]
pub struct Cli {
    /// Interface to bind
    #[arg(long, env = "SEO_META_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "SEO_META_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Page fetch timeout in seconds
    #[arg(long, env = "SEO_META_FETCH_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub fetch_timeout_secs: u64,

    /// User-Agent sent with page fetches
    #[arg(long, env = "SEO_META_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum redirects followed per fetch
    #[arg(long, env = "SEO_META_MAX_REDIRECTS", default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,
}

impl Cli {
    /// Build the service configuration from parsed arguments
    pub fn into_config(self) -> ServiceConfig {
        ServiceConfig {
            host: self.host,
            port: self.port,
            fetch: FetchConfig {
                timeout_secs: self.fetch_timeout_secs,
                user_agent: self.user_agent,
                max_redirects: self.max_redirects,
            },
        }
    }
}
