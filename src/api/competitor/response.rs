// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Competitor API response types

use serde::{Deserialize, Serialize};
use url::Url;

use crate::extract::{positioning_hint, KeywordEntry, PageDocument};

/// Response body for POST /competitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorResponse {
    pub url: String,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub h1: Option<String>,
    pub top_keywords: Vec<KeywordEntry>,
    /// Templated summary of the page's apparent focus; null without keywords
    pub positioning_hint: Option<String>,
}

impl CompetitorResponse {
    /// Assemble a competitor snapshot from a parsed page
    pub fn new(url: &Url, page: PageDocument, top_keywords: Vec<KeywordEntry>) -> Self {
        let positioning_hint = positioning_hint(
            page.title.as_deref(),
            page.first_heading.as_deref(),
            &top_keywords,
        );

        Self {
            url: url.to_string(),
            title: page.title,
            meta_description: page.meta_description,
            h1: page.first_heading,
            top_keywords,
            positioning_hint,
        }
    }
}
