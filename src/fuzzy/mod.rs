// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Pairwise helpers live here. The bulk case, matching one query against
//! the whole vocabulary, reuses [`next_row`] while walking the trie.

mod levenshtein;

pub use levenshtein::*;
