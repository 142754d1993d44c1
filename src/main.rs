// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Parser;
use seo_meta::{api::start_server, cli::Cli, fetch::HttpFetcher, version};
use std::{env, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Cli::parse().into_config();
    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    info!("Starting {}", version::get_version_string());
    info!(
        "Fetch settings: timeout {}s, user agent {:?}, max redirects {}",
        config.fetch.timeout_secs, config.fetch.user_agent, config.fetch.max_redirects
    );

    let fetcher = HttpFetcher::new(config.fetch.clone())?;

    start_server(&config, Arc::new(fetcher)).await
}
