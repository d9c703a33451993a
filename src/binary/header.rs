// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trie index header and footer.
//!
//! The header is 16 bytes of fixed-size fields, read before anything else.
//! It carries the node and word counts so the decoder can pre-size its arena
//! and cross-check the body once it has walked it.
//!
//! The footer is 8 bytes: a CRC32 over everything before it, plus a magic
//! number ("TNKE", the header magic reversed). A wrong footer means the blob
//! was truncated or corrupted, and nothing in it is trusted.

use std::io::{self, Write};

use crc32fast::Hasher as Crc32Hasher;

use crate::error::{Error, Result};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Magic bytes: "EKNT" in ASCII (header)
pub const MAGIC: [u8; 4] = [0x45, 0x4B, 0x4E, 0x54];

/// Footer magic: "TNKE" (reversed, marks valid file end)
pub const FOOTER_MAGIC: [u8; 4] = [0x54, 0x4E, 0x4B, 0x45];

/// Current format version
pub const VERSION: u8 = 1;

// ============================================================================
// SECURITY LIMITS (prevent resource exhaustion from malicious input)
// ============================================================================

/// Maximum blob size: 64 MB
pub const MAX_INDEX_SIZE: usize = 64 * 1024 * 1024;

/// Maximum varint bytes (u64 needs at most 10 bytes)
pub const MAX_VARINT_BYTES: usize = 10;

// ============================================================================
// HEADER
// ============================================================================

/// Node flag: this node terminates an indexed word.
pub const NODE_FINAL: u8 = 0b0000_0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieHeader {
    pub version: u8,
    pub node_count: u32,
    pub word_count: u32,
}

impl TrieHeader {
    // 4 (magic) + 1 (version) + 1 (flags) + 2 (reserved) + 2*4 (u32s) = 16
    pub const SIZE: usize = 16;

    pub fn new(node_count: u32, word_count: u32) -> Self {
        Self {
            version: VERSION,
            node_count,
            word_count,
        }
    }

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&MAGIC)?;
        w.write_all(&[self.version])?;
        w.write_all(&[0u8])?; // flags, none defined yet
        w.write_all(&[0u8; 2])?; // reserved
        w.write_all(&self.node_count.to_le_bytes())?;
        w.write_all(&self.word_count.to_le_bytes())?;
        Ok(())
    }

    pub fn read(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(Error::malformed(
                bytes.len(),
                format!("header needs {} bytes, got {}", Self::SIZE, bytes.len()),
            ));
        }
        if bytes[0..4] != MAGIC {
            return Err(Error::malformed(
                0,
                format!("invalid magic: expected EKNT, got {:?}", &bytes[0..4]),
            ));
        }
        let version = bytes[4];
        if version != VERSION {
            return Err(Error::malformed(
                4,
                format!("unsupported version {} (expected {})", version, VERSION),
            ));
        }
        if bytes[5] != 0 || bytes[6] != 0 || bytes[7] != 0 {
            return Err(Error::malformed(5, "reserved header bytes must be zero"));
        }

        Ok(Self {
            version,
            node_count: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            word_count: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        })
    }
}

// ============================================================================
// FOOTER (8 bytes)
// ============================================================================

/// Footer with CRC32 checksum and magic number
#[derive(Debug, Clone, Copy)]
pub struct TrieFooter {
    /// CRC32 of header + node records (everything before the footer)
    pub crc32: u32,
}

impl TrieFooter {
    pub const SIZE: usize = 8; // 4 bytes CRC32 + 4 bytes magic

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.crc32.to_le_bytes())?;
        w.write_all(&FOOTER_MAGIC)?;
        Ok(())
    }

    pub fn read(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(Error::malformed(bytes.len(), "blob too short for footer"));
        }

        let footer_start = bytes.len() - Self::SIZE;

        let magic = &bytes[footer_start + 4..];
        if magic != FOOTER_MAGIC {
            return Err(Error::malformed(
                footer_start + 4,
                format!("invalid footer magic: expected TNKE, got {:?}", magic),
            ));
        }

        let crc32 = u32::from_le_bytes([
            bytes[footer_start],
            bytes[footer_start + 1],
            bytes[footer_start + 2],
            bytes[footer_start + 3],
        ]);

        Ok(Self { crc32 })
    }

    /// Compute CRC32 over the given bytes
    pub fn compute_crc32(data: &[u8]) -> u32 {
        let mut hasher = Crc32Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }
}
