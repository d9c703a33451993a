// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search tuning knobs.
//!
//! Defaults match what the docs search box has always used: complete after
//! three characters, offer five completions, fall back to corrections within
//! two edits, and show 40-word excerpts.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchConfig {
    /// Shorter last terms get no suggestions at all.
    pub min_completion_len: usize,
    pub max_completions: usize,
    /// Edit distance for the correction fallback.
    pub max_correction_distance: usize,
    /// Excerpt budget in words.
    pub fragment_size_goal: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_completion_len: 3,
            max_completions: 5,
            max_correction_distance: 2,
            fragment_size_goal: 40,
        }
    }
}

impl SearchConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&raw).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate().map_err(|reason| Error::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded search config");
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_completions == 0 {
            return Err("maxCompletions must be at least 1".to_string());
        }
        if self.fragment_size_goal == 0 {
            return Err("fragmentSizeGoal must be at least 1".to_string());
        }
        Ok(())
    }
}
