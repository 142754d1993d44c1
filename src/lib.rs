// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Single-page SEO metadata service
//!
//! Fetches one page, extracts its title, meta description, first heading,
//! word count and most frequent keywords, and serves the result over HTTP.

pub mod api;
pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod version;

pub use api::{create_app, start_server, AppState};
pub use config::ServiceConfig;
pub use extract::{extract_keywords, KeywordEntry, PageDocument};
pub use fetch::{FetchConfig, FetchError, FetchResult, HttpFetcher, PageFetcher};
