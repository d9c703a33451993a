// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpts: a word-budgeted view of a document around query hits.
//!
//! Given plain text and the query terms, pick roughly `size_goal` words that
//! show each hit with some context on both sides, and mark every gap with
//! `...`. The walk is greedy and single pass:
//!
//! - the budget is split into one window per ~20 words, so
//!   `matches_goal = min(hits, max(size_goal / 20, 1))`;
//! - a fresh hit pulls in up to `max_lookback = size_goal / matches_goal / 2`
//!   words before it (never re-emitting words already shown), then keeps
//!   the next `max_lookback` words as trailing context (the *passthrough*);
//! - once `matches_goal` hits have been seen, the rest of the budget streams
//!   through contiguously;
//! - if what is left of the document fits in what is left of the budget,
//!   it is shown in full rather than cut just before the end.
//!
//! Output can overshoot `size_goal` by at most one lookback window.

mod matcher;
mod sentences;

pub use matcher::{TermMatcher, MAX_IGNORED_TERM_CHARS};
pub use sentences::{count_words, split_sentences};

use std::fmt;

/// Marker for elided text.
pub const ELLIPSIS: &str = "...";

/// Words per match window when budgeting.
pub const WORDS_PER_WINDOW: usize = 20;

/// One element of an excerpt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Word { text: String, is_match: bool },
    Ellipsis,
}

/// A rendered-on-demand excerpt.
///
/// `Display` gives the plain string with literal `...` markers, which is
/// what [`ellipsize_fragment`] returns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    pieces: Vec<Piece>,
    /// Set when the text was short enough to keep as-is.
    untruncated: Option<String>,
}

/// Ellipsize `text` around `terms` to about `size_goal` words.
///
/// Text with fewer than `size_goal` words comes back unchanged.
pub fn ellipsize_fragment<S: AsRef<str>>(text: &str, terms: &[S], size_goal: usize) -> String {
    Fragment::build(text, terms, size_goal).to_string()
}

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn compact_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Accumulates pieces, inserting an ellipsis at every discontinuity.
struct Excerpt<'w> {
    words: &'w [&'w str],
    hits: &'w [bool],
    pieces: Vec<Piece>,
    words_included: usize,
    /// Position right after the last emitted word.
    next_unincluded: usize,
}

impl<'w> Excerpt<'w> {
    fn emit(&mut self, pos: usize) {
        if pos != self.next_unincluded {
            self.pieces.push(Piece::Ellipsis);
        }
        self.pieces.push(Piece::Word {
            text: self.words[pos].to_string(),
            is_match: self.hits[pos],
        });
        self.words_included += 1;
        self.next_unincluded = pos + 1;
    }

    fn close(&mut self) {
        if self.next_unincluded < self.words.len() && self.pieces.last() != Some(&Piece::Ellipsis) {
            self.pieces.push(Piece::Ellipsis);
        }
    }
}

impl Fragment {
    pub fn build<S: AsRef<str>>(text: &str, terms: &[S], size_goal: usize) -> Self {
        let matcher = TermMatcher::new(terms);
        let words: Vec<&str> = split_sentences(text)
            .into_iter()
            .flat_map(str::split_whitespace)
            .collect();
        let hits: Vec<bool> = words.iter().map(|w| matcher.is_match(w)).collect();

        if words.len() < size_goal {
            return Self {
                pieces: words
                    .iter()
                    .zip(&hits)
                    .map(|(w, &is_match)| Piece::Word {
                        text: (*w).to_string(),
                        is_match,
                    })
                    .collect(),
                untruncated: Some(text.to_string()),
            };
        }
        if size_goal == 0 {
            return Self::default();
        }

        let match_count = hits.iter().filter(|&&h| h).count();
        let matches_goal = match_count.min((size_goal / WORDS_PER_WINDOW).max(1));
        let max_lookback = if matches_goal == 0 {
            0
        } else {
            size_goal / matches_goal / 2
        };

        let mut out = Excerpt {
            words: &words,
            hits: &hits,
            pieces: Vec::new(),
            words_included: 0,
            next_unincluded: 0,
        };
        let mut passthrough = 0usize;
        let mut matches_found = 0usize;

        for pos in 0..words.len() {
            let is_match = hits[pos];
            if is_match {
                matches_found += 1;
            }

            if passthrough > 0 {
                out.emit(pos);
                passthrough -= 1;
            } else if is_match {
                let start = pos.saturating_sub(max_lookback).max(out.next_unincluded);
                for k in start..=pos {
                    out.emit(k);
                }
                passthrough = max_lookback;
            } else if matches_found >= matches_goal {
                // Only reachable with no hits at all: stream from the top.
                out.emit(pos);
            }

            if matches_found >= matches_goal {
                passthrough = size_goal.saturating_sub(out.words_included);
            }

            if out.words_included >= size_goal {
                break;
            }

            let remaining = words.len() - pos - 1;
            if remaining > passthrough && remaining + out.words_included <= size_goal {
                passthrough = remaining;
            }
        }
        out.close();

        Self {
            pieces: out.pieces,
            untruncated: None,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// False when the input was returned unchanged.
    pub fn is_truncated(&self) -> bool {
        self.untruncated.is_none()
    }

    pub fn word_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|p| matches!(p, Piece::Word { .. }))
            .count()
    }

    /// The words that matched a query term, in order.
    pub fn matched_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.pieces.iter().filter_map(|p| match p {
            Piece::Word {
                text,
                is_match: true,
            } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Render with `open`/`close` around every matched word, e.g.
    /// `("<strong>", "</strong>")`. Whitespace is normalized to single
    /// spaces.
    pub fn render_highlighted(&self, open: &str, close: &str) -> String {
        let mut parts = Vec::with_capacity(self.pieces.len());
        for piece in &self.pieces {
            match piece {
                Piece::Word {
                    text,
                    is_match: true,
                } => parts.push(format!("{}{}{}", open, text, close)),
                Piece::Word { text, .. } => parts.push(text.clone()),
                Piece::Ellipsis => parts.push(ELLIPSIS.to_string()),
            }
        }
        parts.join(" ")
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = &self.untruncated {
            return f.write_str(text);
        }
        for (i, piece) in self.pieces.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match piece {
                Piece::Word { text, .. } => f.write_str(text)?,
                Piece::Ellipsis => f.write_str(ELLIPSIS)?,
            }
        }
        Ok(())
    }
}
