// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Derived fields for the metadata responses

use super::keywords::KeywordEntry;

/// Number of keywords quoted in a positioning hint
pub const HINT_TOP_KEYWORDS: usize = 3;

/// Count whitespace-separated words; 0 for blank text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Preferred headline: the first heading, falling back to the title
///
/// Empty strings are treated as missing.
pub fn headline<'a>(first_heading: Option<&'a str>, title: Option<&'a str>) -> Option<&'a str> {
    first_heading
        .filter(|h| !h.is_empty())
        .or_else(|| title.filter(|t| !t.is_empty()))
}

/// One-sentence summary of what a page appears to focus on
///
/// Returns `None` when there are no keywords, whatever the headline.
pub fn positioning_hint(
    title: Option<&str>,
    first_heading: Option<&str>,
    keywords: &[KeywordEntry],
) -> Option<String> {
    if keywords.is_empty() {
        return None;
    }

    let top = keywords
        .iter()
        .take(HINT_TOP_KEYWORDS)
        .map(|entry| entry.keyword.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Some(match headline(first_heading, title) {
        Some(headline) => format!(
            "Headline suggests focus on '{}'. Top themes: {}.",
            headline, top
        ),
        None => format!("Top themes: {}.", top),
    })
}
