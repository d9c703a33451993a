//! Shared test utilities and fixtures.

#![allow(dead_code)]

use ekn_search::{Trie, TrieBuilder};

/// A small documentation-flavoured vocabulary.
pub const DOC_WORDS: &[&str] = &[
    "api", "apple", "apply", "apt", "article", "articles", "async", "await", "cache", "cached",
    "caching", "endless", "encyclopedia", "gnome", "gtk", "hello", "help", "helper", "index",
    "indexed", "indexer", "shell", "shelf", "shells", "trie", "tries", "widget", "widgets",
    "window", "windows",
];

/// Build an index and round-trip it through the binary format, so tests
/// always exercise the same path as a real load.
pub fn load(words: &[&str]) -> Trie {
    let mut builder = TrieBuilder::new();
    builder.extend(words.iter().copied());
    Trie::from_bytes(&builder.to_bytes()).expect("freshly built index must load")
}

pub fn doc_trie() -> Trie {
    load(DOC_WORDS)
}

/// `n` filler words `w0 .. w{n-1}`, with the given positions replaced.
pub fn numbered_text(n: usize, replace: &[(usize, &str)]) -> String {
    let mut words: Vec<String> = (0..n).map(|i| format!("w{}", i)).collect();
    for &(pos, word) in replace {
        words[pos] = word.to_string();
    }
    words.join(" ")
}

/// Word count of a rendered excerpt, ellipses excluded.
pub fn excerpt_words(rendered: &str) -> usize {
    rendered.split_whitespace().filter(|w| *w != "...").count()
}

/// Words of a sorted list of trie nodes.
pub fn node_words(nodes: &[&ekn_search::TrieNode]) -> Vec<String> {
    nodes
        .iter()
        .map(|n| n.word().expect("submatches are final").to_string())
        .collect()
}
