// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Spelling correction: every indexed word within `k` edits of a query.
//!
//! Each trie node on the walk carries one row of the Levenshtein table for
//! "path so far" versus the query. Extending the path by one edge costs one
//! row, so shared prefixes are computed once. The row minimum is a lower
//! bound on the distance of every word below the node; once it exceeds `k`
//! the whole subtree is skipped. That bound is what keeps this sublinear in
//! the vocabulary for small `k`.

use std::collections::BTreeMap;

use super::{NodeId, Trie};
use crate::fuzzy::next_row;

impl Trie {
    /// Indexed words within `max_distance` edits of `word`, with their
    /// distances.
    ///
    /// Sound and complete: every returned word has true Levenshtein distance
    /// ≤ `max_distance`, and no such word is left out. An empty `word` gives
    /// an empty map. Use [`rank_corrections`] for display order.
    pub fn search(&self, word: &str, max_distance: usize) -> BTreeMap<String, usize> {
        let mut results = BTreeMap::new();
        if word.is_empty() {
            return results;
        }

        let query: Vec<char> = word.chars().collect();
        let last = query.len();
        let mut stack: Vec<(NodeId, Vec<usize>)> = vec![(NodeId::ROOT, (0..=last).collect())];
        let mut visited = 0usize;
        let mut pruned = 0usize;

        while let Some((id, row)) = stack.pop() {
            visited += 1;
            let node = self.node(id);
            if let Some(candidate) = node.word() {
                if row[last] <= max_distance {
                    results.insert(candidate.to_string(), row[last]);
                }
            }
            for &(c, child) in &node.children {
                let mut next = Vec::with_capacity(row.len());
                if next_row(&row, &query, c, &mut next) <= max_distance {
                    stack.push((child, next));
                } else {
                    pruned += 1;
                }
            }
        }

        tracing::trace!(
            query = word,
            max_distance,
            visited,
            pruned,
            hits = results.len(),
            "fuzzy trie walk"
        );
        results
    }
}

/// Order corrections for display: closest first, ties broken
/// lexicographically.
pub fn rank_corrections(corrections: &BTreeMap<String, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = corrections
        .iter()
        .map(|(word, &distance)| (word.clone(), distance))
        .collect();
    ranked.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}
