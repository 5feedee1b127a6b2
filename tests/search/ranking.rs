//! Result ordering: tier first, then playlist position, then time.

use super::common::{make_segments, make_transcript, playlist_engine, positions};
use clipfind::{tier_for, EngineConfig, IndexOptions, SearchEngine, SearchMode};

fn engine_with(config: EngineConfig, lines: &[&str]) -> SearchEngine {
    let engine = SearchEngine::new(config);
    engine.build_single_index(Some(&make_segments(lines)));
    engine
}

#[test]
fn test_tier_beats_time() {
    let engine = engine_with(EngineConfig::default(), &["the quikc fox", "the quick fox"]);
    let hits = engine.query("quick", SearchMode::Single);

    assert_eq!(
        positions(&hits),
        vec![
            ("the quick fox".to_string(), 5.0),
            ("the quikc fox".to_string(), 0.0),
        ]
    );
    assert_eq!(tier_for(hits[0].score, true), 0);
    assert_eq!(tier_for(hits[1].score, true), 2);
}

#[test]
fn test_render_up_flips_tiers() {
    let config = EngineConfig {
        render_down: false,
        ..EngineConfig::default()
    };
    let engine = engine_with(config, &["the quikc fox", "the quick fox"]);
    let hits = engine.query("quick", SearchMode::Single);

    assert_eq!(hits[0].text, "the quikc fox");
    assert_eq!(hits[1].text, "the quick fox");
}

#[test]
fn test_same_tier_sorts_by_time() {
    let engine = engine_with(
        EngineConfig::default(),
        &["rust one", "rust two", "rust three"],
    );
    let starts: Vec<f64> = engine
        .query("rust", SearchMode::Single)
        .iter()
        .map(|h| h.start)
        .collect();
    assert_eq!(starts, vec![0.0, 5.0, 10.0]);
}

#[test]
fn test_render_up_reverses_time() {
    let config = EngineConfig {
        render_down: false,
        ..EngineConfig::default()
    };
    let engine = engine_with(config, &["rust one", "rust two", "rust three"]);
    let starts: Vec<f64> = engine
        .query("rust", SearchMode::Single)
        .iter()
        .map(|h| h.start)
        .collect();
    assert_eq!(starts, vec![10.0, 5.0, 0.0]);
}

#[test]
fn test_tier_beats_video_order() {
    let config = EngineConfig {
        playlist: IndexOptions {
            threshold: 0.3,
            ..IndexOptions::playlist()
        },
        ..EngineConfig::default()
    };
    let transcripts = vec![
        make_transcript("videoA", "yt-a", &["the quikc fox"]),
        make_transcript("videoB", "yt-b", &["the quick fox"]),
    ];
    let hits = playlist_engine(&transcripts, config).query("quick", SearchMode::Playlist);

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].video_order, Some(1));
    assert_eq!(hits[1].video_order, Some(0));
}

#[test]
fn test_playlist_groups_stay_contiguous() {
    let transcripts = vec![
        make_transcript("video0", "yt0", &["rust", "more rust", "rust again"]),
        make_transcript("video1", "yt1", &["rust here too"]),
        make_transcript("video2", "yt2", &["no match", "late rust"]),
    ];
    let engine = playlist_engine(&transcripts, EngineConfig::default());
    let hits = engine.query("rust", SearchMode::Playlist);

    let orders: Vec<usize> = hits.iter().filter_map(|h| h.video_order).collect();
    assert_eq!(orders, vec![0, 0, 0, 1, 2]);
    assert_eq!(hits[4].start, 5.0);
}
