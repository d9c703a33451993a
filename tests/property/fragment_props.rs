//! Excerpt invariants over random documents and term sets.

use std::collections::HashMap;

use ekn_search::fragment::{count_words, split_sentences, TermMatcher, WORDS_PER_WINDOW};
use ekn_search::{ellipsize_fragment, Fragment, Piece};
use proptest::prelude::*;

use super::common::excerpt_words;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Document words: mostly filler, sometimes a term, sometimes punctuated.
fn doc_word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => prop::string::string_regex("[a-z]{1,6}").unwrap(),
        1 => prop::sample::select(vec!["gnome", "Endless", "widget.", "(shell)", "trie:"])
            .prop_map(str::to_string),
        1 => prop::string::string_regex("[a-z]{1,6}[.!?:]").unwrap(),
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(doc_word_strategy(), 0..200).prop_map(|words| words.join(" "))
}

fn terms_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["gnome", "endless", "widget", "shell", "trie", "the"])
            .prop_map(str::to_string),
        0..4,
    )
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: text under the budget comes back byte-for-byte.
    #[test]
    fn prop_short_text_unchanged(
        text in document_strategy(),
        terms in terms_strategy(),
        slack in 1usize..50,
    ) {
        let goal = count_words(&text) + slack;
        prop_assert_eq!(ellipsize_fragment(&text, &terms, goal), text);
    }

    /// Property: overshoot is bounded by one lookback window.
    #[test]
    fn prop_word_budget_bounded(
        text in document_strategy(),
        terms in terms_strategy(),
        goal in 1usize..80,
    ) {
        let out = ellipsize_fragment(&text, &terms, goal);
        if count_words(&text) < goal {
            return Ok(());
        }

        let matcher = TermMatcher::new(&terms);
        let hits = text.split_whitespace().filter(|w| matcher.is_match(w)).count();
        let matches_goal = hits.min((goal / WORDS_PER_WINDOW).max(1));
        let max_lookback = if matches_goal == 0 { 0 } else { goal / matches_goal / 2 };
        prop_assert!(
            excerpt_words(&out) <= goal + max_lookback,
            "{} words for goal {} (lookback {})",
            excerpt_words(&out),
            goal,
            max_lookback
        );
    }

    /// Property: never two ellipses in a row, and an ellipsis sits exactly
    /// where the emitted words skip over part of the document.
    #[test]
    fn prop_ellipses_mark_real_gaps(
        words in prop::collection::vec(doc_word_strategy(), 0..200),
        terms in terms_strategy(),
        goal in 1usize..80,
    ) {
        // Numbered so each word maps back to exactly one position.
        let words: Vec<String> = words
            .iter()
            .enumerate()
            .map(|(i, w)| format!("{}{}", i, w))
            .collect();
        let positions: HashMap<&str, usize> = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.as_str(), i))
            .collect();
        let fragment = Fragment::build(&words.join(" "), &terms, goal);
        if !fragment.is_truncated() {
            return Ok(());
        }

        let mut next_expected = 0usize;
        let mut pending_gap = false;
        for piece in fragment.pieces() {
            match piece {
                Piece::Ellipsis => {
                    prop_assert!(!pending_gap, "adjacent ellipses");
                    pending_gap = true;
                }
                Piece::Word { text: word, .. } => {
                    let pos = positions[word.as_str()];
                    if pending_gap {
                        prop_assert!(pos > next_expected, "ellipsis before adjacent word {}", word);
                    } else {
                        prop_assert_eq!(pos, next_expected);
                    }
                    next_expected = pos + 1;
                    pending_gap = false;
                }
            }
        }
        // A trailing ellipsis only when the tail was cut.
        prop_assert_eq!(pending_gap, next_expected < words.len());
    }

    /// Property: same input, same output.
    #[test]
    fn prop_deterministic(
        text in document_strategy(),
        terms in terms_strategy(),
        goal in 1usize..80,
    ) {
        prop_assert_eq!(
            ellipsize_fragment(&text, &terms, goal),
            ellipsize_fragment(&text, &terms, goal)
        );
    }

    /// Property: every match flag agrees with a direct substring check.
    #[test]
    fn prop_match_flags(
        text in document_strategy(),
        terms in terms_strategy(),
        goal in 1usize..80,
    ) {
        let usable: Vec<String> = terms.iter().filter(|t| t.chars().count() > 3).cloned().collect();
        for piece in Fragment::build(&text, &terms, goal).pieces() {
            if let Piece::Word { text: word, is_match } = piece {
                let lower = word.to_lowercase();
                prop_assert_eq!(*is_match, usable.iter().any(|t| lower.contains(t.as_str())));
            }
        }
    }

    /// Property: sentence splitting only ever removes one whitespace char
    /// per boundary, so word counts are preserved.
    #[test]
    fn prop_sentences_preserve_words(text in document_strategy()) {
        let from_sentences: usize = split_sentences(&text)
            .iter()
            .map(|s| s.split_whitespace().count())
            .sum();
        prop_assert_eq!(from_sentences, text.split_whitespace().count());
    }
}
