// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::version;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceInfoResponse {
    pub ok: bool,
    pub service: String,
    pub version: String,
}

/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// GET /
pub async fn root_handler() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        ok: true,
        service: version::SERVICE_NAME.to_string(),
        version: version::VERSION.to_string(),
    })
}
