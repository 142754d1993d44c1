// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Single-page fetching
//!
//! One outbound GET per request, with a fixed timeout and a browser-like
//! `User-Agent`. No retries and no caching.
//!
//! ```text
//! URL → PageFetcher::fetch → FetchResult { status, body } → error_for_status → HTML
//! ```

pub mod config;
pub mod fetcher;

pub use config::FetchConfig;
pub use fetcher::{FetchError, FetchResult, HttpFetcher, PageFetcher};
