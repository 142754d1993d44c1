// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Competitor snapshot API endpoint
//!
//! Provides the `/competitor` HTTP endpoint: page metadata plus a
//! positioning hint derived from the headline and top keywords.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::competitor_handler;
pub use request::CompetitorRequest;
pub use response::CompetitorResponse;
