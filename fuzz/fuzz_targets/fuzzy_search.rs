// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the trie-guided Levenshtein search.
//!
//! The pruned walk must report exactly the words a full scan would, with
//! the same distances. Pruning bugs show up as missing corrections.

#![no_main]

use arbitrary::Arbitrary;
use ekn_search::{edit_distance, Trie};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    words: Vec<String>,
    query: String,
    max_distance: u8,
}

fuzz_target!(|input: SearchInput| {
    // Cap sizes to keep each run fast
    let words: Vec<String> = input
        .words
        .into_iter()
        .take(64)
        .map(|w| w.chars().take(12).collect())
        .collect();
    let query: String = input.query.chars().take(12).collect();
    let max_distance = (input.max_distance % 4) as usize;

    let trie = Trie::from_words(&words);
    let found = trie.search(&query, max_distance);

    // INVARIANT 1: every reported distance is the true distance
    for (word, &distance) in &found {
        assert_eq!(distance, edit_distance(word, &query), "{:?} vs {:?}", word, query);
        assert!(distance <= max_distance);
    }

    // INVARIANT 2: nothing within range is missed
    if !query.is_empty() {
        for word in words.iter().filter(|w| !w.is_empty()) {
            if edit_distance(word, &query) <= max_distance {
                assert!(found.contains_key(word), "missed {:?} for {:?}", word, query);
            }
        }
    }
});
