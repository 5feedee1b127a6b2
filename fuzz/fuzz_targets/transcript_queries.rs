// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for whole-engine queries.
//!
//! Builds a small transcript from fuzzer input and queries it. The engine must
//! never panic, must keep hits in display order, and must hand back spans that
//! index real characters of the hit text.

#![no_main]

use arbitrary::Arbitrary;
use clipfind::{compare_hits, SearchEngine, SearchMode, TranscriptSegment};
use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    lines: Vec<String>,
    query: String,
}

fuzz_target!(|input: QueryInput| {
    let segments: Vec<TranscriptSegment> = input
        .lines
        .iter()
        .take(64)
        .enumerate()
        .map(|(i, line)| TranscriptSegment::new(line.clone(), i as f64 * 5.0, 5.0))
        .collect();

    let engine = SearchEngine::default();
    engine.build_single_index(Some(&segments));
    let hits = engine.query(&input.query, SearchMode::Single);

    for pair in hits.windows(2) {
        assert_ne!(compare_hits(&pair[0], &pair[1], true), Ordering::Greater);
    }
    for hit in &hits {
        let len = hit.text.chars().count();
        for [start, end] in &hit.match_indices {
            assert!(
                start <= end && *end < len,
                "bad span {:?} for {:?}",
                hit.match_indices,
                hit.text
            );
        }
    }
});
