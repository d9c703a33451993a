// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which words count as hits when budgeting an excerpt.

use crate::utils::fold;

/// Terms this short never trigger a match window ("the", "and", "of"...).
pub const MAX_IGNORED_TERM_CHARS: usize = 3;

/// Case- and accent-insensitive substring matcher over a set of query terms.
///
/// A word matches if it contains any usable term. Both sides go through
/// [`fold`], the same folding queries get from `normalize`, so "Café" in a
/// document matches the query term "cafe". Terms are compared literally,
/// never as patterns.
#[derive(Debug, Clone, Default)]
pub struct TermMatcher {
    terms: Vec<String>,
}

impl TermMatcher {
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Self {
        let mut terms: Vec<String> = terms
            .iter()
            .map(|t| fold(t.as_ref()))
            .filter(|t| t.chars().count() > MAX_IGNORED_TERM_CHARS)
            .collect();
        terms.sort();
        terms.dedup();
        Self { terms }
    }

    /// No usable terms: nothing will ever match.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_match(&self, word: &str) -> bool {
        if self.terms.is_empty() {
            return false;
        }
        let folded = fold(word);
        self.terms.iter().any(|t| folded.contains(t.as_str()))
    }
}
