// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ekn_search::binary::{TrieFooter, TrieHeader};
use ekn_search::{
    normalize, rank_corrections, Fragment, SearchConfig, SearchSession, Trie, TrieBuilder,
};

mod cli;
use cli::display::{
    field, format_bytes, highlight, row, section_bot, section_top, styled, use_colors, verdict,
    BOLD, RESET,
};
use cli::{Cli, Commands};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("EKN_SEARCH_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", styled(&[BOLD], "error:"), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::default(),
    };

    match cli.command {
        Commands::Build { input, output, raw } => run_build(&input, &output, raw),
        Commands::Inspect { file, words } => run_inspect(&file, words),
        Commands::Complete { file, query } => {
            let trie = load_trie(&file)?;
            let session = SearchSession::new(&trie, &config);
            for proposal in session.suggest(&query) {
                println!("{}", proposal);
            }
            Ok(())
        }
        Commands::Correct {
            file,
            word,
            distance,
        } => {
            let trie = load_trie(&file)?;
            let distance = distance.unwrap_or(config.max_correction_distance);
            for (candidate, d) in rank_corrections(&trie.search(&normalize(&word), distance)) {
                println!("{}\t{}", d, candidate);
            }
            Ok(())
        }
        Commands::Excerpt { file, terms, size } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let terms: Vec<String> = terms.iter().map(|t| normalize(t)).collect();
            let size_goal = size.unwrap_or(config.fragment_size_goal);
            let fragment =
                Fragment::build(&ekn_search::compact_whitespace(&text), &terms, size_goal);
            if use_colors() {
                let open = format!("{}{}", BOLD, highlight());
                println!("{}", fragment.render_highlighted(&open, RESET));
            } else {
                println!("{}", fragment);
            }
            Ok(())
        }
    }
}

fn load_trie(path: &Path) -> Result<Trie> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Trie::from_bytes(&bytes).with_context(|| format!("loading index {}", path.display()))
}

fn run_build(input: &Path, output: &Path, raw: bool) -> Result<()> {
    let text =
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;

    let mut builder = TrieBuilder::new();
    let mut seen = 0usize;
    for word in text.split_whitespace() {
        seen += 1;
        if raw {
            builder.insert(word);
        } else {
            builder.insert(&normalize(word));
        }
    }

    let bytes = builder.to_bytes();
    fs::write(output, &bytes).with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(
        words = seen,
        unique = builder.word_count(),
        bytes = bytes.len(),
        output = %output.display(),
        "index written"
    );
    Ok(())
}

fn run_inspect(path: &Path, list_words: bool) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    section_top("FILE");
    field("path", &path.display().to_string());
    field("size", &format_bytes(bytes.len()));

    let header = TrieHeader::read(&bytes);
    if let Ok(header) = &header {
        field("version", &header.version.to_string());
        field("nodes", &header.node_count.to_string());
        field("words", &header.word_count.to_string());
    }
    let crc_ok = TrieFooter::read(&bytes).is_ok_and(|footer| {
        bytes.len() >= TrieFooter::SIZE
            && footer.crc32 == TrieFooter::compute_crc32(&bytes[..bytes.len() - TrieFooter::SIZE])
    });
    field("header", &verdict(header.is_ok()));
    field("checksum", &verdict(crc_ok));

    let trie = match Trie::from_bytes(&bytes) {
        Ok(trie) => trie,
        Err(e) => {
            field("structure", &verdict(false));
            row(&format!("  {}", e));
            section_bot();
            return Err(e).context("index is not usable");
        }
    };
    field("structure", &verdict(true));
    section_bot();

    let stats = trie.stats();
    section_top("TRIE");
    field("nodes", &stats.node_count.to_string());
    field("words", &stats.word_count.to_string());
    field("max depth", &stats.max_depth.to_string());
    field("max fanout", &stats.max_fanout.to_string());
    if stats.word_count > 0 {
        field(
            "bytes/word",
            &format!("{:.1}", bytes.len() as f64 / stats.word_count as f64),
        );
    }
    section_bot();

    if list_words {
        for word in trie.words() {
            println!("{}", word);
        }
    }
    Ok(())
}
