//! Shared test utilities and fixtures.

#![allow(dead_code)]

use clipfind::{EngineConfig, SearchEngine, SearchHit, Transcript};

// Re-export canonical test utilities from clipfind::testing
pub use clipfind::testing::{make_playlist, make_segment, make_segments, make_transcript};

// ============================================================================
// ENGINES
// ============================================================================

/// The two-segment transcript most scenarios start from.
pub fn fox_engine() -> SearchEngine {
    let engine = SearchEngine::default();
    engine.build_single_index(Some(&[
        make_segment("the quick fox", 0.0),
        make_segment("jumps over", 5.0),
    ]));
    engine
}

/// A default engine with a single-video index over `lines`.
pub fn single_engine(lines: &[&str]) -> SearchEngine {
    let engine = SearchEngine::default();
    engine.build_single_index(Some(&make_segments(lines)));
    engine
}

/// An engine with a playlist index over `transcripts`.
pub fn playlist_engine(transcripts: &[Transcript], config: EngineConfig) -> SearchEngine {
    let engine = SearchEngine::new(config);
    engine.build_playlist_index(Some(transcripts));
    engine
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Spans are inclusive, ascending, pairwise disjoint, and inside the text.
pub fn assert_spans_well_formed(hit: &SearchHit) {
    let len = hit.text.chars().count();
    for [start, end] in &hit.match_indices {
        assert!(start <= end, "inverted span in {:?}", hit);
        assert!(*end < len, "span past end of text in {:?}", hit);
    }
    for pair in hit.match_indices.windows(2) {
        assert!(
            pair[0][1] < pair[1][0],
            "spans overlap or are out of order in {:?}",
            hit
        );
    }
}

/// The (text, start) sequence of a result list, for order comparisons.
pub fn positions(hits: &[SearchHit]) -> Vec<(String, f64)> {
    hits.iter().map(|h| (h.text.clone(), h.start)).collect()
}
