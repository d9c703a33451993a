// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index parsing under adversarial input.
//!
//! A content pack ships its index as an opaque blob. A corrupt or crafted
//! one should produce an error, never a panic or a runaway allocation:
//! child counts near u64::MAX, truncated records, CRCs over garbage.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ekn_search::Trie;

fuzz_target!(|data: &[u8]| {
    let Ok(trie) = Trie::from_bytes(data) else {
        return;
    };

    // INVARIANT 1: the header's word count is what the nodes hold
    assert_eq!(trie.words().count(), trie.word_count());

    // INVARIANT 2: every stored word leads back to its own final node
    for word in trie.words() {
        let node = trie.lookup_node(word).expect("stored word must be reachable");
        assert!(node.is_final());
        assert_eq!(node.word(), Some(word));
    }

    // INVARIANT 3: accepted blobs are canonical, so re-encoding is exact
    assert_eq!(trie.to_bytes(), data, "decode/encode is not the identity");
});
