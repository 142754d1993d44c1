// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page metadata API endpoint
//!
//! Provides the `/meta` HTTP endpoint.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::meta_handler;
pub use request::MetaRequest;
pub use response::MetaResponse;
