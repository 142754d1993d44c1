// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod auth;
pub mod competitor;
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod lax_int;
pub mod meta;
pub mod pipeline;

pub use auth::{require_api_key, ApiKey, API_KEY_HEADER};
pub use competitor::{competitor_handler, CompetitorRequest, CompetitorResponse};
pub use errors::{ApiError, ErrorResponse};
pub use handlers::{HealthResponse, ServiceInfoResponse};
pub use http_server::{create_app, start_server, AppState};
pub use meta::{meta_handler, MetaRequest, MetaResponse};
