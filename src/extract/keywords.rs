// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Frequency-ranked keyword extraction
//!
//! A deliberately simple heuristic: strip everything that is not an ASCII
//! letter, digit or whitespace, lowercase, drop tokens of three characters or
//! fewer, then rank by count. No stemming and no stopword list.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Tokens must be longer than this to count as keywords
pub const MIN_KEYWORD_LEN: usize = 3;

/// A keyword and how often it occurs on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub count: usize,
}

impl KeywordEntry {
    pub fn new(keyword: impl Into<String>, count: usize) -> Self {
        Self {
            keyword: keyword.into(),
            count,
        }
    }
}

fn non_word_regex() -> &'static Regex {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    NON_WORD.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("static regex is valid"))
}

/// Replace punctuation and non-ASCII characters with spaces and lowercase
pub fn normalize(text: &str) -> String {
    non_word_regex().replace_all(text, " ").to_lowercase()
}

/// Rank the significant words of `text` by frequency
///
/// Returns at most `max_keywords` entries ordered by descending count. Ties
/// keep the order in which each word first appeared in the text.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<KeywordEntry> {
    if max_keywords == 0 {
        return Vec::new();
    }

    let normalized = normalize(text);

    let mut counts: Vec<KeywordEntry> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for token in normalized
        .split_whitespace()
        .filter(|token| token.len() > MIN_KEYWORD_LEN)
    {
        match positions.get(token) {
            Some(&index) => counts[index].count += 1,
            None => {
                positions.insert(token, counts.len());
                counts.push(KeywordEntry::new(token, 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-occurrence order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(max_keywords);
    counts
}
