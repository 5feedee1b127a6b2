// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the bitap matcher.
//!
//! Arbitrary text against arbitrary patterns, including patterns longer than
//! one machine word so the chunking path runs. Scores must be finite and
//! non-negative, and every reported span must sit inside the text.

#![no_main]

use arbitrary::Arbitrary;
use clipfind::fuzzy::bitap::{BitapPattern, MatchParams};
use clipfind::util::normalize::fold;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct BitapInput {
    text: String,
    pattern: String,
    location: u8,
    distance: u8,
    threshold: u8,
    ignore_location: bool,
    find_all_matches: bool,
}

fuzz_target!(|input: BitapInput| {
    let text = fold(&input.text, false, true);
    let pattern = BitapPattern::new(fold(&input.pattern, false, true));
    if pattern.is_empty() {
        return;
    }

    let params = MatchParams {
        location: usize::from(input.location),
        distance: usize::from(input.distance),
        threshold: f64::from(input.threshold) / 255.0,
        find_all_matches: input.find_all_matches,
        min_match_char_length: 1,
        include_matches: true,
        ignore_location: input.ignore_location,
    };

    let result = pattern.search_in(&text, &params);
    assert!(
        result.score.is_finite() && result.score >= 0.0,
        "bad score: {}",
        result.score
    );
    if !result.is_match {
        assert!(result.indices.is_empty());
    }
    for [start, end] in &result.indices {
        assert!(start <= end, "inverted span {:?}", result.indices);
        assert!(*end < text.len(), "span past end of text");
    }
});
