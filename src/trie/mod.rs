// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The term index: an immutable prefix tree.
//!
//! Nodes live in a flat arena in pre-order, so a node's subtree is always a
//! contiguous run after it and children are reached by index, not pointer.
//! Each node keeps its outgoing edges sorted by code point, which is what
//! makes every traversal below deterministic without extra sorting.
//!
//! Nothing here folds case. Callers lowercase queries before they get here
//! (see [`crate::normalize`]).

mod builder;
mod fuzzy;

pub use builder::TrieBuilder;
pub use fuzzy::rank_corrections;

use crate::binary;
use crate::error::Result;

/// Index of a node in the trie arena. The root is always `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One character transition in the trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Outgoing edges, strictly ascending by char.
    pub(crate) children: Vec<(char, NodeId)>,
    /// The full word this node terminates. `Some` iff the node is final.
    pub(crate) word: Option<Box<str>>,
}

impl TrieNode {
    pub(crate) fn new(word: Option<Box<str>>) -> Self {
        Self {
            children: Vec::new(),
            word,
        }
    }

    #[inline]
    pub fn is_final(&self) -> bool {
        self.word.is_some()
    }

    /// The complete indexed word ending here, if this node is final.
    #[inline]
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Outgoing edges in ascending char order.
    #[inline]
    pub fn children(&self) -> &[(char, NodeId)] {
        &self.children
    }

    /// Follow the edge labelled `c`, if any.
    #[inline]
    pub fn child(&self, c: char) -> Option<NodeId> {
        self.children
            .binary_search_by(|(edge, _)| edge.cmp(&c))
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// Read-only prefix tree over the indexed vocabulary.
///
/// Built once, either with [`TrieBuilder`] or from a serialized blob via
/// [`Trie::from_bytes`], and never mutated afterwards. Every query borrows
/// `&self`, so a loaded trie can be shared across threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie {
    pub(crate) nodes: Vec<TrieNode>,
    pub(crate) word_count: usize,
}

/// Size figures reported by `ekn-search inspect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub node_count: usize,
    pub word_count: usize,
    pub max_depth: usize,
    pub max_fanout: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }
}

impl Trie {
    /// Deserialize a trie from an index blob.
    ///
    /// Either the whole blob is valid and a complete trie comes back, or an
    /// [`crate::ErrorKind::MalformedIndex`] error does. There is no partial
    /// result.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        binary::decode_trie(bytes)
    }

    /// Serialize to the index blob format understood by [`Trie::from_bytes`].
    pub fn to_bytes(&self) -> Vec<u8> {
        binary::encode_trie(self)
    }

    /// Convenience for tests and small tools: build directly from words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TrieBuilder::new();
        builder.extend(words);
        builder.build()
    }

    #[inline]
    pub fn root(&self) -> &TrieNode {
        &self.nodes[0]
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    fn walk(&self, word: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for c in word.chars() {
            current = self.node(current).child(c)?;
        }
        Some(current)
    }

    /// Walk one edge per character of `word`.
    ///
    /// Returns the node the walk ends on, final or not. The empty string
    /// addresses the root.
    pub fn lookup_node(&self, word: &str) -> Option<&TrieNode> {
        self.walk(word).map(|id| self.node(id))
    }

    /// Is `word` itself an indexed word (not just a prefix of one)?
    pub fn contains(&self, word: &str) -> bool {
        self.lookup_node(word).is_some_and(TrieNode::is_final)
    }

    /// Up to `max_results` indexed words starting with `prefix`.
    ///
    /// Results come back in lexicographic (code point) order, `prefix` itself
    /// first when it is indexed. An empty prefix, a zero limit or an unknown
    /// prefix all give an empty list.
    pub fn lookup_submatches(&self, prefix: &str, max_results: usize) -> Vec<&TrieNode> {
        let mut results = Vec::new();
        if prefix.is_empty() || max_results == 0 {
            return results;
        }
        let Some(start) = self.walk(prefix) else {
            return results;
        };

        // Depth-first pre-order; pushing children in reverse pops them in
        // ascending order.
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_final() {
                results.push(node);
                if results.len() == max_results {
                    break;
                }
            }
            stack.extend(node.children.iter().rev().map(|&(_, child)| child));
        }
        results
    }

    /// Every indexed word, in lexicographic order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        // Arena order is pre-order with sorted edges, i.e. lexicographic.
        self.nodes.iter().filter_map(TrieNode::word)
    }

    pub fn stats(&self) -> IndexStats {
        let mut max_depth = 0;
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(
                self.node(id)
                    .children
                    .iter()
                    .map(|&(_, child)| (child, depth + 1)),
            );
        }
        IndexStats {
            node_count: self.nodes.len(),
            word_count: self.word_count,
            max_depth,
            max_fanout: self
                .nodes
                .iter()
                .map(|n| n.children.len())
                .max()
                .unwrap_or(0),
        }
    }
}
