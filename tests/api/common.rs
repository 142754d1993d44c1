// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Shared helpers for router-level tests

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use seo_meta::{
    api::{create_app, AppState},
    fetch::{FetchError, FetchResult, PageFetcher},
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt; // for `oneshot`

pub const SAMPLE_PAGE: &str = "<html><head><title>Hi</title></head>\
    <body><h1>Welcome</h1><p>test test test more more</p></body></html>";

/// Fetcher that returns a canned result and counts how often it is called
pub struct CountingFetcher {
    result: Result<FetchResult, FetchError>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl CountingFetcher {
    pub fn returning(result: Result<FetchResult, FetchError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn page(status: u16, body: &str) -> Arc<Self> {
        Self::returning(Ok(FetchResult::new(status, body)))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for CountingFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        self.result.clone()
    }
}

pub fn app(fetcher: Arc<CountingFetcher>) -> Router {
    create_app(AppState::new(fetcher))
}

/// POST a JSON body and return the status and parsed JSON response
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &str,
    api_key: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    send(app, request).await
}

/// GET `uri` and return the status and parsed JSON response
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
