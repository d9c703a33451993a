// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for varint (LEB128) encoding/decoding.
//!
//! Child counts and edge labels are varints. If decode panics on malformed
//! input or accepts two spellings of one value, the index loader breaks.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ekn_search::binary::{decode_varint, encode_varint};

fuzz_target!(|data: &[u8]| {
    // Property 1: decode never panics
    let Ok((value, consumed)) = decode_varint(data, 0) else {
        return;
    };

    // Property 2: only the minimal encoding is accepted, so re-encoding
    // reproduces exactly the consumed bytes
    let mut reencoded = Vec::new();
    encode_varint(value, &mut reencoded);
    assert_eq!(
        &data[..consumed],
        reencoded.as_slice(),
        "accepted a non-canonical varint for {}",
        value
    );

    // Property 3: at most 10 bytes for a u64
    assert!(consumed <= 10, "varint consumed {} bytes", consumed);
});
