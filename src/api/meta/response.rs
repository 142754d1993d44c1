// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Meta API response types

use serde::{Deserialize, Serialize};
use url::Url;

use crate::extract::{word_count, KeywordEntry, PageDocument};

/// Response body for POST /meta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaResponse {
    /// Normalised source URL
    pub url: String,

    /// Page `<title>`
    pub title: Option<String>,

    /// `<meta name="description">` content
    pub meta_description: Option<String>,

    /// First `<h1>` text
    pub h1: Option<String>,

    /// Words in the page's visible text
    pub word_count: usize,

    /// Most frequent keywords, highest count first
    pub top_keywords: Vec<KeywordEntry>,
}

impl MetaResponse {
    /// Assemble a metadata response from a parsed page
    pub fn new(url: &Url, page: PageDocument, top_keywords: Vec<KeywordEntry>) -> Self {
        Self {
            url: url.to_string(),
            word_count: word_count(&page.text),
            title: page.title,
            meta_description: page.meta_description,
            h1: page.first_heading,
            top_keywords,
        }
    }
}
