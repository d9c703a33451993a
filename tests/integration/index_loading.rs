//! Loading index files from disk and rejecting damaged ones.

use std::fs;

use ekn_search::binary::{TrieFooter, TrieHeader};
use ekn_search::{ErrorKind, Trie, TrieBuilder};

use super::common::{doc_trie, DOC_WORDS};

#[test]
fn test_index_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dumped.trie");

    let mut builder = TrieBuilder::new();
    builder.extend(DOC_WORDS);
    let mut file = fs::File::create(&path).unwrap();
    builder.write_to(&mut file).unwrap();
    drop(file);

    let trie = Trie::from_bytes(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(trie.word_count(), DOC_WORDS.len());
    for word in DOC_WORDS {
        let node = trie.lookup_node(word).unwrap();
        assert!(node.is_final());
        assert_eq!(node.word(), Some(*word));
    }
}

#[test]
fn test_reserialize_is_stable() {
    let trie = doc_trie();
    let bytes = trie.to_bytes();
    assert_eq!(Trie::from_bytes(&bytes).unwrap().to_bytes(), bytes);
}

#[test]
fn test_every_single_byte_flip_is_rejected() {
    let bytes = doc_trie().to_bytes();
    for i in 0..bytes.len() {
        let mut damaged = bytes.clone();
        damaged[i] ^= 0x20;
        let err = Trie::from_bytes(&damaged).expect_err("corruption must be detected");
        assert_eq!(err.kind(), ErrorKind::MalformedIndex, "byte {}", i);
    }
}

#[test]
fn test_every_truncation_is_rejected() {
    let bytes = doc_trie().to_bytes();
    for len in 0..bytes.len() {
        assert!(Trie::from_bytes(&bytes[..len]).is_err(), "length {}", len);
    }
}

#[test]
fn test_garbage_is_rejected() {
    assert!(Trie::from_bytes(b"").is_err());
    assert!(Trie::from_bytes(b"not a trie at all, just some text").is_err());
    assert!(Trie::from_bytes(&[0u8; TrieHeader::SIZE + TrieFooter::SIZE]).is_err());
}

#[test]
fn test_load_failure_distinct_from_empty_results() {
    let empty = Trie::from_bytes(&TrieBuilder::new().to_bytes()).unwrap();
    assert!(empty.lookup_submatches("app", 5).is_empty());
    assert!(empty.search("apple", 2).is_empty());

    let err = Trie::from_bytes(&[1, 2, 3]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedIndex);
    assert!(err.to_string().starts_with("malformed index"));
}

#[test]
fn test_unicode_vocabulary() {
    let words = ["über", "überall", "naïve", "東京", "東京都", "emoji🦀"];
    let mut builder = TrieBuilder::new();
    builder.extend(words);
    let trie = Trie::from_bytes(&builder.to_bytes()).unwrap();

    for word in words {
        assert!(trie.contains(word), "{}", word);
    }
    let hits: Vec<&str> = trie
        .lookup_submatches("東京", 5)
        .iter()
        .filter_map(|n| n.word())
        .collect();
    assert_eq!(hits, vec!["東京", "東京都"]);
    assert_eq!(trie.search("emoji", 1).get("emoji🦀"), Some(&1));
}
