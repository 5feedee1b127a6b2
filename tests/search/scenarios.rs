//! End-to-end scenarios against the query engine.
//!
//! Each test builds an engine the way the worker would, runs one or more
//! queries, and checks the complete result list.

use super::common::{fox_engine, make_playlist, make_segments, make_transcript, playlist_engine};
use clipfind::{tier_for, EngineConfig, SearchEngine, SearchMode};

// ============================================================================
// SINGLE VIDEO
// ============================================================================

#[test]
fn test_quick_fox_single_hit() {
    let hits = fox_engine().query("quick", SearchMode::Single);

    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.text, "the quick fox");
    assert_eq!(hit.start, 0.0);
    assert_eq!(hit.match_indices, vec![[4, 8]]);
    assert_eq!(tier_for(hit.score, true), 0);
    assert!(hit.source_video_id.is_none());
    assert!(hit.video_order.is_none());
}

#[test]
fn test_stale_index_after_clear() {
    let engine = SearchEngine::default();
    engine.build_single_index(Some(&make_segments(&[
        "one rust", "two rust", "three rust", "four rust", "five rust",
    ])));
    assert_eq!(engine.query("rust", SearchMode::Single).len(), 5);

    engine.build_single_index(None);
    assert!(engine.query("rust", SearchMode::Single).is_empty());
}

#[test]
fn test_rebuild_replaces_instead_of_appending() {
    let engine = SearchEngine::default();
    engine.build_single_index(Some(&make_segments(&["old rust"])));
    engine.build_single_index(Some(&make_segments(&["new rust"])));

    let hits = engine.query("rust", SearchMode::Single);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].text, "new rust");
}

#[test]
fn test_init_twice_is_idempotent() {
    let segments = make_segments(&["the quick fox", "quick thinking", "slow and steady"]);
    let engine = SearchEngine::default();

    engine.build_single_index(Some(&segments));
    let first = engine.query("quick", SearchMode::Single);
    engine.build_single_index(Some(&segments));
    let second = engine.query("quick", SearchMode::Single);

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

// ============================================================================
// PLAYLIST
// ============================================================================

#[test]
fn test_playlist_video_order_beats_time() {
    let transcripts = vec![
        make_transcript("videoA", "yt-a", &["intro", "rust in A"]),
        make_transcript("videoB", "yt-b", &["rust in B"]),
    ];
    let engine = playlist_engine(&transcripts, EngineConfig::default());
    let hits = engine.query("rust", SearchMode::Playlist);

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].source_video_id.as_deref(), Some("videoA"));
    assert_eq!(hits[0].start, 5.0);
    assert_eq!(hits[1].source_video_id.as_deref(), Some("videoB"));
    assert_eq!(hits[1].start, 0.0);
}

#[test]
fn test_playlist_cap() {
    let lines = vec!["match me"; 100];
    let transcripts = make_playlist(7, &lines);
    let engine = playlist_engine(&transcripts, EngineConfig::default());
    assert_eq!(engine.index_len(SearchMode::Playlist), 700);

    let hits = engine.query("match", SearchMode::Playlist);
    assert_eq!(hits.len(), 500);
    // The cap keeps the earliest candidates in playlist order
    assert_eq!(hits.first().and_then(|h| h.video_order), Some(0));
    assert_eq!(hits.last().and_then(|h| h.video_order), Some(4));
}

#[test]
fn test_single_mode_is_uncapped() {
    let lines = vec!["match me"; 600];
    let engine = SearchEngine::default();
    engine.build_single_index(Some(&make_segments(&lines)));
    assert_eq!(engine.query("match", SearchMode::Single).len(), 600);
}

#[test]
fn test_playlist_rejects_weak_matches() {
    let transcript = make_transcript("video1", "yt1", &["the quikc fox", "the quick fox"]);
    let transcripts = vec![transcript];
    let engine = playlist_engine(&transcripts, EngineConfig::default());

    let hits = engine.query("quick", SearchMode::Playlist);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].text, "the quick fox");
}

#[test]
fn test_playlist_clear_leaves_single_alone() {
    let engine = fox_engine();
    engine.build_playlist_index(Some(&make_playlist(2, &["quick"])));
    engine.build_playlist_index(Some(&[]));

    assert!(engine.query("quick", SearchMode::Playlist).is_empty());
    assert_eq!(engine.query("quick", SearchMode::Single).len(), 1);
}
