//! A search box session driven the way the docs page drives it.

use ekn_search::{SearchConfig, SearchSession};

use super::common::{doc_trie, numbered_text};

#[test]
fn test_typeahead_then_results() {
    let trie = doc_trie();
    let config = SearchConfig::default();
    let mut session = SearchSession::new(&trie, &config);

    // Typing "GTK wid" proposes completions of the last term, leaving the
    // earlier words as typed.
    assert_eq!(
        session.suggest("GTK wid"),
        vec!["GTK widget", "GTK widgets"]
    );

    // The user picks one; both terms are real index words.
    assert_eq!(session.do_search("gtk widget"), &["gtk", "widget"]);

    // URL lists arrive per token, in any order.
    assert!(session
        .record_urls("widget", &["gtk/button.html", "gtk/label.html"])
        .is_empty());
    assert_eq!(
        session.record_urls("gtk", &["gtk/label.html", "gtk/window.html"]),
        vec!["gtk/label.html"]
    );

    let page = numbered_text(120, &[(70, "widget")]);
    let excerpt = session.excerpt(&page);
    assert!(excerpt.is_truncated());
    assert_eq!(excerpt.matched_words().collect::<Vec<_>>(), vec!["widget"]);
}

#[test]
fn test_typo_gets_corrections() {
    let trie = doc_trie();
    let config = SearchConfig::default();
    let session = SearchSession::new(&trie, &config);

    // Nothing starts with "indxe", so corrections are offered instead.
    assert_eq!(session.suggest("indxe"), vec!["index", "indexed", "indexer"]);
    // Closest first, then alphabetical.
    assert_eq!(session.suggest("helpr"), vec!["help", "helper", "hello"]);
}

#[test]
fn test_config_controls_correction_radius() {
    let trie = doc_trie();
    let config = SearchConfig {
        max_correction_distance: 0,
        ..SearchConfig::default()
    };
    let session = SearchSession::new(&trie, &config);
    assert!(session.suggest("helpr").is_empty());
}
