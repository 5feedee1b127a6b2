//! Which characters a hit highlights.

use super::common::{assert_spans_well_formed, single_engine};
use clipfind::SearchMode;

#[test]
fn test_strong_match_highlights_every_literal_occurrence() {
    let engine = single_engine(&["Rust and rust and RUST"]);
    let hits = engine.query("rust", SearchMode::Single);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].match_indices, vec![[0, 3], [9, 12], [18, 21]]);
    assert_eq!(hits[0].highlighted(), vec!["Rust", "rust", "RUST"]);
}

#[test]
fn test_weak_match_uses_fuzzy_runs() {
    let engine = single_engine(&["the quikc fox"]);
    let hits = engine.query("quick", SearchMode::Single);

    assert_eq!(hits.len(), 1);
    assert!(hits[0].score > 0.05);
    assert_eq!(hits[0].match_indices, vec![[4, 8]]);
}

#[test]
fn test_diacritics_fall_back_to_fuzzy_spans() {
    // folded matching finds it, but the literal scan only lowercases
    let engine = single_engine(&["Visit the CAFÉ today"]);
    let hits = engine.query("cafe", SearchMode::Single);

    assert_eq!(hits.len(), 1);
    assert!(hits[0].score <= 0.05);
    assert_eq!(hits[0].match_indices, vec![[10, 13]]);
    assert_eq!(hits[0].highlighted(), vec!["CAFÉ"]);
}

#[test]
fn test_accented_text_unaccented_query() {
    let engine = single_engine(&["naïve approach"]);
    let hits = engine.query("naive", SearchMode::Single);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].match_indices, vec![[0, 4]]);
}

#[test]
fn test_decoded_entities_are_what_gets_highlighted() {
    let engine = single_engine(&["rock &amp; roll"]);
    let hits = engine.query("rock & roll", SearchMode::Single);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].text, "rock & roll");
    assert_eq!(hits[0].match_indices, vec![[0, 10]]);
}

#[test]
fn test_long_query_spans_the_phrase() {
    let line = "we talked about the quick brown fox jumping over the lazy dog today";
    let engine = single_engine(&[line]);
    let query = "the quick brown fox jumping over the lazy dog";
    assert!(query.chars().count() > 32);

    let hits = engine.query(query, SearchMode::Single);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].match_indices, vec![[16, 60]]);
}

#[test]
fn test_spans_are_well_formed_across_a_transcript() {
    let engine = single_engine(&[
        "welcome back to the channel",
        "today we are talking about rust",
        "rust is a systems language",
        "trust me, the borrow checker helps",
        "rusty old code needs love",
        "nothing to see here",
    ]);
    for query in ["rust", "channel", "borrow", "lang", "ode"] {
        for hit in engine.query(query, SearchMode::Single) {
            assert_spans_well_formed(&hit);
        }
    }
}
