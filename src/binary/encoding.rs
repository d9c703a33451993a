// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary encoding primitives: varints and a bounds-checked read cursor.
//!
//! Child counts and code points are usually tiny (ASCII letters, a handful
//! of children per node), so LEB128 keeps most of them to a single byte.
//!
//! # References
//!
//! - **Varint (LEB128)**: Little-endian base-128 variable-length integer encoding.
//!   See: DWARF4 specification §7.6 "Variable Length Data", and
//!   Google Protocol Buffers encoding: <https://protobuf.dev/programming-guides/encoding/>

use super::header::MAX_VARINT_BYTES;
use crate::error::{Error, Result};

// ============================================================================
// VARINT ENCODING
// ============================================================================

/// Encode a varint to bytes
pub fn encode_varint(mut value: u64, buf: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            break;
        } else {
            buf.push(byte | 0x80);
        }
    }
}

/// Decode a varint from bytes, returning (value, bytes_consumed).
///
/// `base` is the absolute offset of `bytes[0]`, only used for error reports.
pub fn decode_varint(bytes: &[u8], base: usize) -> Result<(u64, usize)> {
    if bytes.is_empty() {
        return Err(Error::malformed(base, "empty buffer for varint"));
    }

    let mut result: u64 = 0;
    let mut shift = 0;
    let mut i = 0;

    while i < bytes.len() && i < MAX_VARINT_BYTES {
        let byte = bytes[i];
        // The tenth byte may only contribute the top bit of a u64.
        if shift == 63 && byte & 0x7E != 0 {
            return Err(Error::malformed(base + i, "varint overflows u64"));
        }
        result |= ((byte & 0x7F) as u64) << shift;
        i += 1;
        if byte & 0x80 == 0 {
            // A zero final byte after a continuation is an overlong encoding.
            if byte == 0 && i > 1 {
                return Err(Error::malformed(base + i - 1, "non-canonical varint"));
            }
            return Ok((result, i));
        }
        shift += 7;
    }

    if i >= MAX_VARINT_BYTES {
        Err(Error::malformed(
            base + i,
            "varint exceeds maximum length (possible corruption)",
        ))
    } else {
        Err(Error::malformed(base + i, "incomplete varint"))
    }
}

// ============================================================================
// READ CURSOR
// ============================================================================

/// Forward-only reader over an immutable byte slice.
///
/// Offsets in errors are absolute within the original blob.
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8], start: usize) -> Self {
        Self { bytes, pos: start }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let byte = *self
            .bytes
            .get(self.pos)
            .ok_or_else(|| Error::malformed(self.pos, "unexpected end of node data"))?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_varint(&mut self) -> Result<u64> {
        let rest = self.bytes.get(self.pos..).unwrap_or_default();
        let (value, consumed) = decode_varint(rest, self.pos)?;
        self.pos += consumed;
        Ok(value)
    }

    /// Read a varint and interpret it as a Unicode scalar value.
    pub fn read_char(&mut self) -> Result<char> {
        let at = self.pos;
        let value = self.read_varint()?;
        u32::try_from(value)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| Error::malformed(at, format!("invalid code point {:#x}", value)))
    }
}
