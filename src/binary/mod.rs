// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary trie index format.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │ HEADER (16 bytes)                                              │
//! │   magic "EKNT" │ version │ flags │ reserved[2] │               │
//! │   node_count u32 │ word_count u32                              │
//! ├────────────────────────────────────────────────────────────────┤
//! │ NODES (pre-order)                                              │
//! │   flags u8 (bit0 = final) │ child_count varint │               │
//! │   { char varint │ <child node> } * child_count                 │
//! ├────────────────────────────────────────────────────────────────┤
//! │ FOOTER (8 bytes): crc32 u32 │ magic "TNKE"                     │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Children are written in strictly ascending char order. Words are not
//! stored; a final node's word is its path from the root, rebuilt while
//! decoding.
//!
//! Decoding is a single forward pass with an explicit stack, so a deep or
//! hostile blob cannot exhaust the call stack. Every structural check fails
//! the whole load.

mod encoding;
mod header;

pub use encoding::{decode_varint, encode_varint, ByteCursor};
pub use header::{
    TrieFooter, TrieHeader, FOOTER_MAGIC, MAGIC, MAX_INDEX_SIZE, MAX_VARINT_BYTES, NODE_FINAL,
    VERSION,
};

use crate::error::{Error, Result};
use crate::trie::{NodeId, Trie, TrieNode};

// A child record is at least a char byte, a flags byte and a count byte.
const MIN_CHILD_RECORD: usize = 3;

/// Serialize a trie.
pub fn encode_trie(trie: &Trie) -> Vec<u8> {
    let mut buf = Vec::with_capacity(TrieHeader::SIZE + trie.nodes.len() * 4 + TrieFooter::SIZE);
    TrieHeader::new(trie.nodes.len() as u32, trie.word_count as u32)
        .write(&mut buf)
        .expect("writing to Vec cannot fail");

    write_node_record(trie.root(), &mut buf);
    let mut stack: Vec<(NodeId, usize)> = vec![(NodeId::ROOT, 0)];
    while let Some(top) = stack.last_mut() {
        let node = trie.node(top.0);
        let Some(&(c, child)) = node.children.get(top.1) else {
            stack.pop();
            continue;
        };
        top.1 += 1;
        encode_varint(c as u64, &mut buf);
        write_node_record(trie.node(child), &mut buf);
        stack.push((child, 0));
    }

    let crc32 = TrieFooter::compute_crc32(&buf);
    TrieFooter { crc32 }
        .write(&mut buf)
        .expect("writing to Vec cannot fail");
    buf
}

fn write_node_record(node: &TrieNode, buf: &mut Vec<u8>) {
    buf.push(if node.is_final() { NODE_FINAL } else { 0 });
    encode_varint(node.children.len() as u64, buf);
}

struct Frame {
    id: NodeId,
    remaining: u64,
    last_edge: Option<char>,
}

/// Parse and validate an index blob.
pub fn decode_trie(bytes: &[u8]) -> Result<Trie> {
    let result = decode_unchecked(bytes);
    match &result {
        Ok(trie) => tracing::debug!(
            bytes = bytes.len(),
            nodes = trie.node_count(),
            words = trie.word_count(),
            "loaded trie index"
        ),
        Err(e) => tracing::warn!(bytes = bytes.len(), error = %e, "rejected trie index"),
    }
    result
}

fn decode_unchecked(bytes: &[u8]) -> Result<Trie> {
    if bytes.len() > MAX_INDEX_SIZE {
        return Err(Error::malformed(
            MAX_INDEX_SIZE,
            format!("index of {} bytes exceeds limit of {}", bytes.len(), MAX_INDEX_SIZE),
        ));
    }
    if bytes.len() < TrieHeader::SIZE + TrieFooter::SIZE {
        return Err(Error::malformed(bytes.len(), "blob too short for header and footer"));
    }

    let header = TrieHeader::read(bytes)?;
    let footer = TrieFooter::read(bytes)?;
    let content_end = bytes.len() - TrieFooter::SIZE;
    let computed = TrieFooter::compute_crc32(&bytes[..content_end]);
    if computed != footer.crc32 {
        return Err(Error::malformed(
            content_end,
            format!(
                "CRC32 mismatch: stored {:#010x}, computed {:#010x}",
                footer.crc32, computed
            ),
        ));
    }

    let body = &bytes[..content_end];
    let declared_nodes = header.node_count as usize;
    if declared_nodes == 0 {
        return Err(Error::malformed(8, "node count must include the root"));
    }
    // Every node takes at least two bytes, so this bounds the allocation.
    let mut nodes: Vec<TrieNode> =
        Vec::with_capacity(declared_nodes.min((content_end - TrieHeader::SIZE) / 2 + 1));
    let mut cursor = ByteCursor::new(body, TrieHeader::SIZE);
    let mut path = String::new();
    let mut word_count = 0usize;

    let (root_final, root_children) = read_node_record(&mut cursor, body.len())?;
    if root_final {
        return Err(Error::malformed(TrieHeader::SIZE, "root node cannot be final"));
    }
    nodes.push(TrieNode::new(None));
    let mut stack = vec![Frame {
        id: NodeId::ROOT,
        remaining: root_children,
        last_edge: None,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.remaining == 0 {
            stack.pop();
            if !stack.is_empty() {
                path.pop();
            }
            continue;
        }
        frame.remaining -= 1;

        let edge_at = cursor.position();
        let c = cursor.read_char()?;
        if frame.last_edge.is_some_and(|last| c <= last) {
            return Err(Error::malformed(
                edge_at,
                format!("edge {:?} is not in ascending order", c),
            ));
        }
        frame.last_edge = Some(c);
        let parent = frame.id;

        if nodes.len() >= declared_nodes {
            return Err(Error::malformed(
                edge_at,
                format!("more nodes than the {} declared", declared_nodes),
            ));
        }

        let record_at = cursor.position();
        let (is_final, child_count) = read_node_record(&mut cursor, body.len())?;
        if !is_final && child_count == 0 {
            // Only the root of an empty index may lead nowhere.
            return Err(Error::malformed(
                record_at,
                format!("edge {:?} leads to a dead branch", c),
            ));
        }
        path.push(c);
        let word = if is_final {
            word_count += 1;
            Some(Box::<str>::from(path.as_str()))
        } else {
            None
        };

        let id = NodeId(nodes.len() as u32);
        nodes.push(TrieNode::new(word));
        nodes[parent.index()].children.push((c, id));
        stack.push(Frame {
            id,
            remaining: child_count,
            last_edge: None,
        });
    }

    if !cursor.is_at_end() {
        return Err(Error::malformed(
            cursor.position(),
            format!("{} trailing bytes after node data", body.len() - cursor.position()),
        ));
    }
    if nodes.len() != declared_nodes {
        return Err(Error::malformed(
            8,
            format!("header declares {} nodes, found {}", declared_nodes, nodes.len()),
        ));
    }
    if word_count != header.word_count as usize {
        return Err(Error::malformed(
            12,
            format!("header declares {} words, found {}", header.word_count, word_count),
        ));
    }

    Ok(Trie { nodes, word_count })
}

fn read_node_record(cursor: &mut ByteCursor<'_>, end: usize) -> Result<(bool, u64)> {
    let flags_at = cursor.position();
    let flags = cursor.read_u8()?;
    if flags & !NODE_FINAL != 0 {
        return Err(Error::malformed(
            flags_at,
            format!("unknown node flags {:#04x}", flags),
        ));
    }
    let count_at = cursor.position();
    let child_count = cursor.read_varint()?;
    let available = end.saturating_sub(cursor.position()) / MIN_CHILD_RECORD;
    if child_count > available as u64 {
        return Err(Error::malformed(
            count_at,
            format!("child count {} exceeds remaining data", child_count),
        ));
    }
    Ok((flags & NODE_FINAL != 0, child_count))
}
