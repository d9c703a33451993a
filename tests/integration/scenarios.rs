//! End-to-end behaviour of lookups, corrections and excerpts.

use ekn_search::{ellipsize_fragment, rank_corrections, Fragment, Piece};

use super::common::{excerpt_words, load, node_words, numbered_text};

#[test]
fn test_completion_excludes_other_branches() {
    let trie = load(&["apple", "apply", "apt"]);
    assert_eq!(
        node_words(&trie.lookup_submatches("app", 5)),
        vec!["apple", "apply"]
    );
}

#[test]
fn test_single_correction() {
    let trie = load(&["hello"]);
    let hits = trie.search("helo", 1);
    assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec![("hello".to_string(), 1)]);
    assert!(trie.search("xyz", 1).is_empty());
}

#[test]
fn test_corrections_ranked_for_display() {
    let trie = load(&["window", "windows", "widow", "wind", "winding"]);
    let ranked = rank_corrections(&trie.search("windo", 2));
    let words: Vec<&str> = ranked.iter().map(|(w, _)| w.as_str()).collect();
    // "winding" is three edits away
    assert_eq!(words, vec!["wind", "window", "widow", "windows"]);
    assert!(ranked.windows(2).all(|pair| pair[0].1 <= pair[1].1));
}

#[test]
fn test_excerpt_around_single_hit() {
    let text = numbered_text(100, &[(50, "endless")]);
    let out = ellipsize_fragment(&text, &["endless"], 20);

    assert!(out.starts_with("... "), "{}", out);
    assert!(out.ends_with(" ..."), "{}", out);
    let words: Vec<&str> = out.split_whitespace().collect();
    let at = words.iter().position(|w| *w == "endless").unwrap();
    // leading "..." plus ten words of context before the hit
    assert_eq!(at, 11);
    assert_eq!(words[1], "w40");
    assert_eq!(words[words.len() - 2], "w59");
}

#[test]
fn test_short_text_untouched() {
    let text = "A short article about GNOME.\n  Nothing to cut here.";
    assert_eq!(ellipsize_fragment(text, &["gnome"], 40), text);
    assert!(!ellipsize_fragment(text, &["gnome"], 40).contains("..."));
}

#[test]
fn test_sentence_structure_does_not_limit_lookback() {
    let text = "First sentence here. Second one follows now! Then the keyword \
                appears: gnome shell is nice. More words after it keep coming and \
                coming until the budget is gone. Even more filler text exists here \
                so that the whole thing is long enough to need cutting down.";
    let fragment = Fragment::build(text, &["gnome"], 12);
    let rendered = fragment.to_string();
    assert!(rendered.contains("the keyword appears: gnome"), "{}", rendered);
    assert!(excerpt_words(&rendered) <= 12 + 6);
}

#[test]
fn test_multiple_terms_each_get_a_window() {
    let text = numbered_text(300, &[(40, "widget"), (120, "Window"), (250, "toolkit")]);
    let fragment = Fragment::build(&text, &["widget", "window", "toolkit"], 60);
    let matched: Vec<&str> = fragment.matched_words().collect();
    assert_eq!(matched, vec!["widget", "Window", "toolkit"]);

    let pieces = fragment.pieces();
    assert_eq!(pieces.first(), Some(&Piece::Ellipsis));
    assert!(pieces
        .windows(2)
        .all(|pair| !(pair[0] == Piece::Ellipsis && pair[1] == Piece::Ellipsis)));
}

#[test]
fn test_only_short_terms_behaves_like_no_terms() {
    let text = numbered_text(80, &[(30, "the"), (31, "and")]);
    let out = ellipsize_fragment(&text, &["the", "and"], 10);
    assert_eq!(out, format!("{} ...", numbered_text(10, &[])));
}
