// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sentence segmentation for excerpt budgeting.
//!
//! A sentence ends after a terminator (a run of `.`, or one of `:` `!` `?`),
//! optionally followed by a run of one closing character (`"` `'` `)` `}`
//! `]`), when the next character is whitespace. That whitespace character
//! is consumed by the split.

#[inline]
fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | '}' | ']')
}

/// Split `text` into sentence-like chunks.
///
/// Always returns at least one chunk (possibly empty). Concatenating the
/// chunks with one whitespace character between them gives back `text`.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let mut j = match chars[i].1 {
            '.' => {
                let mut j = i;
                while j < chars.len() && chars[j].1 == '.' {
                    j += 1;
                }
                j
            }
            ':' | '!' | '?' => i + 1,
            _ => {
                i += 1;
                continue;
            }
        };

        if let Some(&(_, closer)) = chars.get(j).filter(|(_, c)| is_closer(*c)) {
            while j < chars.len() && chars[j].1 == closer {
                j += 1;
            }
        }

        match chars.get(j) {
            Some(&(at, ws)) if ws.is_whitespace() => {
                sentences.push(&text[start..at]);
                start = at + ws.len_utf8();
                i = j + 1;
            }
            _ => i = j,
        }
    }

    sentences.push(&text[start..]);
    sentences
}

/// Number of whitespace-separated words across all sentences of `text`.
pub fn count_words(text: &str) -> usize {
    split_sentences(text)
        .iter()
        .map(|s| s.split_whitespace().count())
        .sum()
}
