// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page metadata extraction
//!
//! ```text
//! HTML → PageDocument::parse → { title, meta description, h1, text }
//!                                                             ↓
//!                                  extract_keywords → [KeywordEntry]
//!                                                             ↓
//!                          word_count / positioning_hint (assembler)
//! ```

pub mod assembler;
pub mod document;
pub mod keywords;

pub use assembler::{headline, positioning_hint, word_count};
pub use document::PageDocument;
pub use keywords::{extract_keywords, KeywordEntry};
