// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Unauthenticated service endpoints and routing

use axum::http::StatusCode;
use serde_json::json;

use super::common::{app, get_json, post_json, CountingFetcher, SAMPLE_PAGE};

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get_json(app(CountingFetcher::page(200, SAMPLE_PAGE)), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn test_root_endpoint() {
    let (status, body) = get_json(app(CountingFetcher::page(200, SAMPLE_PAGE)), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["service"], json!("seo-meta"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = get_json(app(CountingFetcher::page(200, SAMPLE_PAGE)), "/v1/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_meta_rejects_get() {
    let (status, _) = get_json(app(CountingFetcher::page(200, SAMPLE_PAGE)), "/meta").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let fetcher = CountingFetcher::page(200, SAMPLE_PAGE);
    let (status, _) = post_json(app(fetcher.clone()), "/meta", "{not json", Some("key")).await;

    assert!(status.is_client_error());
    assert_eq!(fetcher.calls(), 0);
}
