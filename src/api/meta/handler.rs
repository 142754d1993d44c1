// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Meta API endpoint handler

use axum::{extract::State, http::HeaderMap, Json};
use tracing::{debug, info, warn};

use super::request::MetaRequest;
use super::response::MetaResponse;
use crate::api::auth::require_api_key;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::pipeline::load_page;
use crate::extract::extract_keywords;

/// POST /meta - Extract SEO metadata from a page
///
/// # Request
/// - `url`: Page to fetch (required, http/https)
/// - `max_keywords`: Keywords to return (default 10)
///
/// # Response
/// - `url`, `title`, `meta_description`, `h1`
/// - `word_count`: Words in the visible text
/// - `top_keywords`: `[{keyword, count}]`, highest count first
///
/// The body is validated before the API key is checked, so a bad body is
/// reported as 422 even without a key.
///
/// # Errors
/// - 422 Unprocessable Entity: Invalid body or URL
/// - 401 Unauthorized: Missing `x-api-key` header
/// - 502 Bad Gateway: Page could not be fetched or returned an error status
pub async fn meta_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<MetaRequest>,
) -> Result<Json<MetaResponse>, ApiError> {
    debug!("Meta request: {:?}", request.url);

    let url = request.validate().map_err(|e| {
        warn!("Meta validation failed: {}", e);
        e
    })?;
    require_api_key(&headers)?;

    let page = load_page(state.fetcher.as_ref(), &url).await?;
    let top_keywords = extract_keywords(&page.text, request.keyword_limit());
    let response = MetaResponse::new(&url, page, top_keywords);

    info!(
        "Meta complete for {}: {} words, {} keywords",
        response.url,
        response.word_count,
        response.top_keywords.len()
    );

    Ok(Json(response))
}
