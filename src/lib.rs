// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side search for offline knowledge bundles.
//!
//! Two pieces do the work:
//!
//! - a [`Trie`] over the index vocabulary, loaded once from a compact binary
//!   blob, answering exact lookups, prefix completions and bounded
//!   edit-distance corrections;
//! - an excerpt builder ([`ellipsize_fragment`] / [`Fragment`]) that cuts a
//!   document's text down to a word budget around the query terms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  binary/    │────▶│   trie/      │────▶│   session.rs     │
//! │ (blob codec)│     │ (lookup,     │     │ (query state,    │
//! │             │     │  submatches, │     │  suggestions)    │
//! └─────────────┘     │  search)     │     └────────┬─────────┘
//!                     └──────────────┘              │
//!                            ▲                      ▼
//!                     ┌──────────────┐     ┌──────────────────┐
//!                     │   fuzzy/     │     │   fragment/      │
//!                     │ (Levenshtein)│     │ (excerpts)       │
//!                     └──────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use ekn_search::{ellipsize_fragment, TrieBuilder, Trie};
//!
//! let mut builder = TrieBuilder::new();
//! builder.extend(["apple", "apply", "apt"]);
//! let trie = Trie::from_bytes(&builder.to_bytes()).unwrap();
//!
//! let completions: Vec<_> = trie
//!     .lookup_submatches("app", 5)
//!     .iter()
//!     .filter_map(|n| n.word())
//!     .collect();
//! assert_eq!(completions, ["apple", "apply"]);
//! assert_eq!(trie.search("aple", 1).get("apple"), Some(&1));
//!
//! assert_eq!(ellipsize_fragment("too short", &["short"], 40), "too short");
//! ```

pub mod binary;
pub mod config;
mod error;
pub mod fragment;
pub mod fuzzy;
mod session;
mod trie;
mod utils;

pub use config::SearchConfig;
pub use error::{Error, ErrorKind, Result};
pub use fragment::{compact_whitespace, ellipsize_fragment, Fragment, Piece};
pub use fuzzy::{edit_distance, levenshtein_within};
pub use session::SearchSession;
pub use trie::{rank_corrections, IndexStats, NodeId, Trie, TrieBuilder, TrieNode};
pub use utils::{normalize, split_terms};
