// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for span merging and literal span search.

#![no_main]

use arbitrary::Arbitrary;
use clipfind::{find_literal_spans, merge_spans, resolve_spans};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SpanInput {
    spans: Vec<(u16, u8)>,
    text: String,
    query: String,
    score: u8,
}

fuzz_target!(|input: SpanInput| {
    let spans: Vec<[usize; 2]> = input
        .spans
        .iter()
        .map(|&(start, len)| [usize::from(start), usize::from(start) + usize::from(len)])
        .collect();

    let merged = merge_spans(&spans);
    for pair in merged.windows(2) {
        assert!(
            pair[0][1] + 1 < pair[1][0],
            "touching spans survived: {:?}",
            merged
        );
    }
    assert_eq!(merge_spans(&merged), merged);

    let literal = find_literal_spans(&input.text, &input.query);
    for pair in literal.windows(2) {
        assert!(
            pair[0][1] < pair[1][0],
            "overlapping literal spans: {:?}",
            literal
        );
    }

    let resolved = resolve_spans(
        &input.text,
        &input.query,
        f64::from(input.score) / 255.0,
        &spans,
    );
    for pair in resolved.windows(2) {
        assert!(
            pair[0][1] < pair[1][0],
            "resolved spans out of order: {:?}",
            resolved
        );
    }
});
