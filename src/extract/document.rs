// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Parsed view over a fetched page
//!
//! Every lookup is independent and optional. A page without a title, meta
//! description or heading is not an error, the field is simply `None`.

use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text is never rendered
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Metadata and plain text extracted from one HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDocument {
    /// Trimmed text of the first `<title>`
    pub title: Option<String>,
    /// Trimmed `content` of `<meta name="description">`
    pub meta_description: Option<String>,
    /// Text of the first `<h1>`
    pub first_heading: Option<String>,
    /// Text nodes of the page joined by single spaces
    pub text: String,
}

impl PageDocument {
    /// Parse raw HTML and extract every field up front
    ///
    /// The DOM is dropped before returning, so the result is `Send` and can
    /// be held across `.await` points.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        Self {
            title: extract_title(&document),
            meta_description: extract_meta_content(&document, "description"),
            first_heading: extract_first_heading(&document),
            text: extract_visible_text(&document),
        }
    }
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

/// Trimmed text of the first `<title>`
///
/// An empty `<title></title>` is absent; a whitespace-only title is `""`.
fn extract_title(document: &Html) -> Option<String> {
    let title = select_first(document, "title")?.text().collect::<String>();
    if title.is_empty() {
        return None;
    }

    Some(title.trim().to_string())
}

/// `content` of the first `<meta>` whose `name` equals `name` exactly
///
/// Only the first matching tag is considered. A missing or empty `content`
/// attribute yields `None`.
pub fn extract_meta_content(document: &Html, name: &str) -> Option<String> {
    let selector = Selector::parse("meta[name]").ok()?;
    let content = document
        .select(&selector)
        .find(|el| el.value().attr("name") == Some(name))?
        .value()
        .attr("content")
        .filter(|content| !content.is_empty())?;

    Some(content.trim().to_string())
}

/// Text of the first `<h1>`, each text node trimmed and concatenated
fn extract_first_heading(document: &Html) -> Option<String> {
    let heading = select_first(document, "h1")?;

    Some(heading.text().map(str::trim).collect::<String>())
}

/// Every text node outside script/style/template, joined with spaces
fn extract_visible_text(document: &Html) -> String {
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .map_or(false, |el| HIDDEN_ELEMENTS.contains(&el.name()))
                });
                (!hidden).then_some(&**text)
            }
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
