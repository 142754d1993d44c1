// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Competitor API endpoint handler

use axum::{extract::State, http::HeaderMap, Json};
use tracing::{debug, info, warn};

use super::request::CompetitorRequest;
use super::response::CompetitorResponse;
use crate::api::auth::require_api_key;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::pipeline::load_page;
use crate::extract::extract_keywords;

/// POST /competitor - Snapshot a competitor page
///
/// Same pipeline as `/meta` without the word count, plus a
/// `positioning_hint` built from the headline and top three keywords.
///
/// The body is validated before the API key is checked, so a bad body is
/// reported as 422 even without a key.
///
/// # Errors
/// - 422 Unprocessable Entity: Invalid body or URL
/// - 401 Unauthorized: Missing `x-api-key` header
/// - 502 Bad Gateway: Page could not be fetched or returned an error status
pub async fn competitor_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CompetitorRequest>,
) -> Result<Json<CompetitorResponse>, ApiError> {
    debug!("Competitor request: {:?}", request.url);

    let url = request.validate().map_err(|e| {
        warn!("Competitor validation failed: {}", e);
        e
    })?;
    require_api_key(&headers)?;

    let page = load_page(state.fetcher.as_ref(), &url).await?;
    let top_keywords = extract_keywords(&page.text, request.keyword_limit());
    let response = CompetitorResponse::new(&url, page, top_keywords);

    info!(
        "Competitor snapshot complete for {}: {} keywords, hint: {}",
        response.url,
        response.top_keywords.len(),
        response.positioning_hint.is_some()
    );

    Ok(Json(response))
}
