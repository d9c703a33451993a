// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the ekn-search command-line interface.
//!
//! `build` turns a word list into an index blob, `inspect` validates and
//! summarizes one, `complete` and `correct` query it the way the search box
//! does, and `excerpt` runs the fragment builder over a text file.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ekn-search",
    about = "Build and query offline search trie indexes",
    version
)]
pub struct Cli {
    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// JSON file with search settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a trie index from a word list
    Build {
        /// Input text file; every whitespace-separated word is indexed
        #[arg(short, long)]
        input: PathBuf,

        /// Output index file
        #[arg(short, long)]
        output: PathBuf,

        /// Index words exactly as written instead of normalizing them
        #[arg(long)]
        raw: bool,
    },

    /// Validate an index file and print its structure
    Inspect {
        /// Path to the index file
        file: PathBuf,

        /// Also list every indexed word
        #[arg(long)]
        words: bool,
    },

    /// Typeahead suggestions for a partial query
    Complete {
        /// Path to the index file
        file: PathBuf,

        /// Query as typed; the last term is completed
        query: String,
    },

    /// Spelling corrections for one word
    Correct {
        /// Path to the index file
        file: PathBuf,

        word: String,

        /// Maximum edit distance (defaults to the configured value)
        #[arg(short, long)]
        distance: Option<usize>,
    },

    /// Print an excerpt of a text file around the given terms
    Excerpt {
        /// Plain-text document
        file: PathBuf,

        /// Query terms
        #[arg(required = true)]
        terms: Vec<String>,

        /// Word budget (defaults to the configured value)
        #[arg(short, long)]
        size: Option<usize>,
    },
}
