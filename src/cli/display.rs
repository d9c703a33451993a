// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output helpers for the ekn-search CLI.
//!
//! Boxed sections for `inspect`, highlighted hits for `excerpt`. Colors are
//! plain ANSI, picked for dark or light backgrounds (`EKN_SEARCH_THEME`,
//! then `COLORFGBG`, defaulting to dark). `NO_COLOR` and non-TTY stdout
//! turn all styling off.

use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 64;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("EKN_SEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7 and above (except 8) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub fn accent() -> &'static str {
    match theme() {
        Theme::Dark => "\x1b[96m",
        Theme::Light => "\x1b[34m",
    }
}

pub fn success() -> &'static str {
    match theme() {
        Theme::Dark => "\x1b[92m",
        Theme::Light => "\x1b[32m",
    }
}

pub fn failure() -> &'static str {
    match theme() {
        Theme::Dark => "\x1b[91m",
        Theme::Light => "\x1b[31m",
    }
}

pub fn highlight() -> &'static str {
    match theme() {
        Theme::Dark => "\x1b[93m",
        Theme::Light => "\x1b[33m",
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if colors are on, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", styled(&[BOLD, accent()], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("┌{}{}┐", label_part, "─".repeat(remaining));
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("│{}{}│", content, " ".repeat(pad));
}

/// Print a `label  value` line inside a section.
pub fn field(label: &str, value: &str) {
    row(&format!("  {:<14}{}", styled(&[DIM], label), value));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("└{}┘", "─".repeat(BOX_WIDTH));
}

/// Checkmark or cross for a validation outcome.
pub fn verdict(ok: bool) -> String {
    if ok {
        styled(&[success()], "✓")
    } else {
        styled(&[failure()], "✗")
    }
}

/// Human-readable byte size.
pub fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
