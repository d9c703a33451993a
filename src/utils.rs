// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-side string normalization.
//!
//! The trie never folds case, so everything that reaches it from user input
//! goes through [`normalize`] first. Index words should go through the same
//! function at build time, or lookups will silently miss.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// - "Café" → "cafe"
/// - "  GNOME   Shell " → "gnome shell"
pub fn normalize(value: &str) -> String {
    fold(value).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case and accent folding shared by queries and document words.
///
/// Unlike [`normalize`], whitespace is left alone.
#[cfg(feature = "unicode-normalization")]
pub fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase only (no unicode-normalization).
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Split a query into normalized terms, keeping their order.
pub fn split_terms(query: &str) -> Vec<String> {
    normalize(query)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
