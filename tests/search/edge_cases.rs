//! Inputs at the edges: blank queries, tiny queries, missing indexes.

use super::common::{fox_engine, single_engine};
use clipfind::{SearchEngine, SearchMode};

#[test]
fn test_blank_queries_return_nothing() {
    let engine = fox_engine();
    for query in ["", " ", "\t\n", "    "] {
        assert!(
            engine.query(query, SearchMode::Single).is_empty(),
            "{:?}",
            query
        );
    }
}

#[test]
fn test_no_index_returns_nothing() {
    let engine = SearchEngine::default();
    assert!(engine.query("quick", SearchMode::Single).is_empty());
    assert!(engine.query("quick", SearchMode::Playlist).is_empty());
    assert!(!engine.has_index(SearchMode::Single));
}

#[test]
fn test_single_char_query_needs_a_run() {
    // one-letter matches only count where the letter repeats back to back
    let engine = single_engine(&["banana", "aardvark"]);
    let hits = engine.query("a", SearchMode::Single);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].text, "aardvark");
    assert_eq!(hits[0].match_indices, vec![[0, 1]]);
}

#[test]
fn test_case_insensitive() {
    let engine = single_engine(&["The Quick Fox"]);
    let hits = engine.query("QUICK", SearchMode::Single);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].match_indices, vec![[4, 8]]);
}

#[test]
fn test_unrelated_query_finds_nothing() {
    assert!(fox_engine().query("zebra", SearchMode::Single).is_empty());
}

#[test]
fn test_query_longer_than_every_segment() {
    let engine = single_engine(&["hi", "yo"]);
    let query = "a considerably longer query than any segment";
    assert!(engine.query(query, SearchMode::Single).is_empty());
}

#[test]
fn test_exact_whole_segment_scores_best() {
    let engine = single_engine(&["hello"]);
    let hits = engine.query("Hello", SearchMode::Single);
    assert_eq!(hits.len(), 1);
    assert!(hits[0].score > 0.0);
    assert!(hits[0].score < 1e-9);
    assert_eq!(hits[0].match_indices, vec![[0, 4]]);
}

#[test]
fn test_blank_segments_are_never_hits() {
    let engine = single_engine(&["   ", "x marks the spot", ""]);
    let hits = engine.query("  x ", SearchMode::Single);
    assert!(hits.iter().all(|h| !h.text.trim().is_empty()), "{:?}", hits);
    assert_eq!(engine.index_len(SearchMode::Single), 3);
}
