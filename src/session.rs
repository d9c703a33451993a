// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-query search state for a search box.
//!
//! A session ties together one loaded trie, the tuning config and the state
//! of the current query: which terms are real index words, and which result
//! URLs have been matched by which of those terms so far. Each query box
//! owns its own session; nothing here is global.

use std::collections::{BTreeSet, HashMap};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::fragment::{compact_whitespace, Fragment};
use crate::trie::{rank_corrections, Trie};
use crate::utils::{normalize, split_terms};

pub struct SearchSession<'t> {
    trie: &'t Trie,
    config: &'t SearchConfig,
    expected_tokens: Vec<String>,
    matched_urls: HashMap<String, BTreeSet<String>>,
}

impl<'t> SearchSession<'t> {
    pub fn new(trie: &'t Trie, config: &'t SearchConfig) -> Self {
        Self {
            trie,
            config,
            expected_tokens: Vec::new(),
            matched_urls: HashMap::new(),
        }
    }

    /// Terms of the current query that are indexed words.
    pub fn expected_tokens(&self) -> &[String] {
        &self.expected_tokens
    }

    /// Start a new query. Only terms that are whole indexed words are kept;
    /// URL matches from the previous query are dropped.
    pub fn do_search(&mut self, query: &str) -> &[String] {
        self.expected_tokens = split_terms(query)
            .into_iter()
            .filter(|term| self.trie.contains(term))
            .collect();
        self.matched_urls.clear();
        tracing::debug!(query, tokens = ?self.expected_tokens, "new query");
        &self.expected_tokens
    }

    /// Typeahead proposals for a partially typed query.
    ///
    /// The last term is normalized and completed from the index; the words
    /// before it are kept exactly as typed. When nothing completes, close
    /// spellings of the last term are offered instead, nearest first.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        if query.chars().last().map_or(true, char::is_whitespace) {
            return Vec::new();
        }
        let mut typed: Vec<&str> = query.split_whitespace().collect();
        let Some(last) = typed.pop() else {
            return Vec::new();
        };
        let last = normalize(last);
        if last.chars().count() < self.config.min_completion_len {
            return Vec::new();
        }

        let propose = |word: &str| {
            let mut parts = typed.clone();
            parts.push(word);
            parts.join(" ")
        };

        let completions: Vec<String> = self
            .trie
            .lookup_submatches(&last, self.config.max_completions)
            .into_iter()
            .filter_map(|node| node.word())
            .map(propose)
            .collect();
        if !completions.is_empty() {
            return completions;
        }

        let corrections = self.trie.search(&last, self.config.max_correction_distance);
        tracing::debug!(term = %last, found = corrections.len(), "no completions, trying corrections");
        rank_corrections(&corrections)
            .into_iter()
            .map(|(word, _)| propose(&word))
            .collect()
    }

    /// Record that `token` matched `urls`.
    ///
    /// Returns the URLs that, with this call, have now been matched by every
    /// expected token, in input order. Tokens outside the current query are
    /// ignored.
    pub fn record_urls<S: AsRef<str>>(&mut self, token: &str, urls: &[S]) -> Vec<String> {
        if !self.expected_tokens.iter().any(|t| t == token) {
            return Vec::new();
        }
        let needed = self.expected_tokens.iter().collect::<BTreeSet<_>>().len();
        let mut completed = Vec::new();
        for url in urls {
            let url = url.as_ref();
            let tokens = self.matched_urls.entry(url.to_string()).or_default();
            if tokens.insert(token.to_string()) && tokens.len() == needed {
                completed.push(url.to_string());
            }
        }
        completed
    }

    /// Excerpt of a document's extracted text for the current query.
    pub fn excerpt(&self, text: &str) -> Fragment {
        Fragment::build(
            &compact_whitespace(text),
            &self.expected_tokens,
            self.config.fragment_size_goal,
        )
    }

    /// [`Self::excerpt`] over many documents.
    pub fn excerpts<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Fragment> {
        #[cfg(feature = "parallel")]
        {
            texts.par_iter().map(|t| self.excerpt(t.as_ref())).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            texts.iter().map(|t| self.excerpt(t.as_ref())).collect()
        }
    }
}
