// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Offline side of the index: collect words, freeze them into a [`Trie`].

use std::collections::BTreeMap;
use std::io::{self, Write};

use super::{NodeId, Trie, TrieNode};

#[derive(Debug, Default)]
struct BuildNode {
    children: BTreeMap<char, usize>,
    is_final: bool,
}

/// Mutable accumulator for index words.
///
/// Duplicate and empty words are ignored. Words are stored exactly as
/// given; normalize them first if the index should be case-insensitive.
#[derive(Debug)]
pub struct TrieBuilder {
    nodes: Vec<BuildNode>,
    word_count: usize,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![BuildNode::default()],
            word_count: 0,
        }
    }

    /// Add a word. Returns `true` if it was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut current = 0;
        for c in word.chars() {
            let next = self.nodes.len();
            let child = *self.nodes[current].children.entry(c).or_insert(next);
            if child == next {
                self.nodes.push(BuildNode::default());
            }
            current = child;
        }
        let node = &mut self.nodes[current];
        if node.is_final {
            return false;
        }
        node.is_final = true;
        self.word_count += 1;
        true
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Freeze into an immutable trie with pre-order node ids.
    pub fn build(&self) -> Trie {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        nodes.push(TrieNode::new(None));

        // (build index, trie id, next child position)
        let mut stack: Vec<(usize, NodeId, usize)> = vec![(0, NodeId::ROOT, 0)];
        let mut path = String::new();

        while let Some(top) = stack.last_mut() {
            let (build_idx, trie_id, next) = *top;
            let Some((&c, &child_build)) = self.nodes[build_idx].children.iter().nth(next) else {
                stack.pop();
                if !stack.is_empty() {
                    path.pop();
                }
                continue;
            };
            top.2 += 1;

            path.push(c);
            let child_id = NodeId(nodes.len() as u32);
            let word = self.nodes[child_build]
                .is_final
                .then(|| Box::<str>::from(path.as_str()));
            nodes.push(TrieNode::new(word));
            nodes[trie_id.index()].children.push((c, child_id));
            stack.push((child_build, child_id, 0));
        }

        Trie {
            nodes,
            word_count: self.word_count,
        }
    }

    /// Build and serialize in one step.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.build().to_bytes()
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.to_bytes())
    }
}
