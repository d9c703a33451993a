// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//!
//! The single-row step [`next_row`] is shared with the trie walk in
//! `Trie::search`, which extends one row per edge instead of one per string.

/// Advance one Levenshtein DP row by one character of the candidate.
///
/// `prev` is the row for the candidate prefix so far against `query`
/// (`prev.len() == query.len() + 1`). The new row is written into `out`.
/// Returns the row minimum, which bounds every completion of the candidate
/// from below.
#[inline]
pub fn next_row(prev: &[usize], query: &[char], c: char, out: &mut Vec<usize>) -> usize {
    out.clear();
    let first = prev[0] + 1;
    out.push(first);
    let mut min_row = first;
    for (j, &qc) in query.iter().enumerate() {
        let cost = usize::from(qc != c);
        let value = (prev[j + 1] + 1).min(out[j] + 1).min(prev[j] + cost);
        out.push(value);
        min_row = min_row.min(value);
    }
    min_row
}

/// Full Levenshtein distance between `a` and `b`, counted in chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let query: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=query.len()).collect();
    let mut scratch = Vec::with_capacity(row.len());
    for c in a.chars() {
        next_row(&row, &query, c, &mut scratch);
        std::mem::swap(&mut row, &mut scratch);
    }
    row[query.len()]
}

/// Are these strings within `max` edits of each other?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return false immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let query: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_len).collect();
    let mut scratch = Vec::with_capacity(row.len());
    for c in a.chars() {
        // Early-exit: if minimum in this row exceeds max, no point continuing
        if next_row(&row, &query, c, &mut scratch) > max {
            return false;
        }
        std::mem::swap(&mut row, &mut scratch);
    }

    row[b_len] <= max
}
