// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only index loading and configuration can fail. Lookups, corrections and
//! excerpts have no error path: an empty result is a normal outcome.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`], for callers that only need to
/// decide whether search can be offered at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedIndex,
    Io,
    Config,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The blob could not be parsed into a trie. Nothing was constructed.
    #[error("malformed index at byte {offset}: {reason}")]
    MalformedIndex { offset: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error in {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        Error::MalformedIndex {
            offset,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedIndex { .. } => ErrorKind::MalformedIndex,
            Error::Io(_) => ErrorKind::Io,
            Error::Config { .. } => ErrorKind::Config,
        }
    }
}
