// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /competitor behaviour against a counting mock fetcher

use axum::http::StatusCode;
use serde_json::json;

use super::common::{app, post_json, CountingFetcher, SAMPLE_PAGE};

#[tokio::test]
async fn test_competitor_snapshot_with_heading() {
    let fetcher = CountingFetcher::page(200, SAMPLE_PAGE);

    let (status, body) = post_json(
        app(fetcher.clone()),
        "/competitor",
        r#"{"url": "https://rival.example/landing"}"#,
        Some("key"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], json!("https://rival.example/landing"));
    assert_eq!(body["h1"], json!("Welcome"));
    assert_eq!(
        body["top_keywords"],
        json!([
            {"keyword": "test", "count": 3},
            {"keyword": "more", "count": 2},
            {"keyword": "welcome", "count": 1}
        ])
    );
    assert_eq!(
        body["positioning_hint"],
        json!("Headline suggests focus on 'Welcome'. Top themes: test, more, welcome.")
    );
    assert!(body.get("word_count").is_none());
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn test_competitor_hint_falls_back_to_title() {
    let html = "<html><head><title>Shop</title>\
        <meta name=\"description\" content=\"Shoes for everyone\"></head>\
        <body><p>shoes shoes shoes shoes</p></body></html>";
    let fetcher = CountingFetcher::page(200, html);

    let (status, body) = post_json(
        app(fetcher),
        "/competitor",
        r#"{"url": "https://shop.example", "max_keywords": 1}"#,
        Some("key"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta_description"], json!("Shoes for everyone"));
    assert_eq!(body["top_keywords"], json!([{"keyword": "shoes", "count": 4}]));
    assert_eq!(
        body["positioning_hint"],
        json!("Headline suggests focus on 'Shop'. Top themes: shoes.")
    );
}

#[tokio::test]
async fn test_competitor_hint_without_headline() {
    let html = "<html><body><p>alpha alpha beta gamma delta</p></body></html>";
    let fetcher = CountingFetcher::page(200, html);

    let (status, body) = post_json(
        app(fetcher),
        "/competitor",
        r#"{"url": "https://rival.example"}"#,
        Some("key"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["positioning_hint"],
        json!("Top themes: alpha, beta, gamma.")
    );
}

#[tokio::test]
async fn test_competitor_without_keywords_has_null_hint() {
    let html = "<html><head><title>Hub</title></head><body><h1>Hey</h1><p>a b c</p></body></html>";
    let fetcher = CountingFetcher::page(200, html);

    let (status, body) = post_json(
        app(fetcher),
        "/competitor",
        r#"{"url": "https://rival.example"}"#,
        Some("key"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["top_keywords"], json!([]));
    assert_eq!(body["positioning_hint"], json!(null));
}

#[tokio::test]
async fn test_competitor_missing_api_key() {
    let fetcher = CountingFetcher::page(200, SAMPLE_PAGE);

    let (status, _) = post_json(
        app(fetcher.clone()),
        "/competitor",
        r#"{"url": "https://rival.example"}"#,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_competitor_invalid_url_without_api_key() {
    let fetcher = CountingFetcher::page(200, SAMPLE_PAGE);

    let (status, body) = post_json(
        app(fetcher.clone()),
        "/competitor",
        r#"{"url": "ftp://rival.example/file"}"#,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["field"], json!("url"));
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_competitor_upstream_not_found() {
    let fetcher = CountingFetcher::page(404, "Not Found");

    let (status, body) = post_json(
        app(fetcher),
        "/competitor",
        r#"{"url": "https://rival.example/gone"}"#,
        Some("key"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["message"].as_str().unwrap().contains("HTTP 404"));
}
