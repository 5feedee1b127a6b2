// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlight spans: which characters of a hit get painted.
//!
//! The fuzzy matcher reports every run of pattern characters it saw, which for
//! a near-perfect match is noisy (stray single letters, overlapping runs from
//! different pattern chunks). When the match is that good we prefer to paint
//! the literal occurrences of the query instead. Weaker matches fall back to
//! the matcher's runs, merged.
//!
//! All offsets are character offsets, inclusive on both ends.

use crate::scoring::TIER1_THRESHOLD;
use crate::types::Span;
use crate::util::normalize::lowercase_chars;

/// Sort and coalesce spans that overlap or touch.
///
/// `[[2,4],[5,7],[10,12]]` becomes `[[2,7],[10,12]]`: 5 follows 4 directly,
/// so they join; 10 leaves a gap after 7, so it doesn't.
pub fn merge_spans(spans: &[Span]) -> Vec<Span> {
    if spans.len() < 2 {
        return spans.to_vec();
    }

    let mut sorted = spans.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<Span> = Vec::with_capacity(sorted.len());
    for [start, end] in sorted {
        match merged.last_mut() {
            Some(last) if start <= last[1].saturating_add(1) => {
                last[1] = last[1].max(end);
            }
            _ => merged.push([start, end]),
        }
    }
    merged
}

/// Every non-overlapping, case-insensitive occurrence of `query` in `text`.
///
/// Queries shorter than two characters produce nothing; a lone letter would
/// light up half the line.
pub fn find_literal_spans(text: &str, query: &str) -> Vec<Span> {
    let needle = lowercase_chars(query);
    if needle.len() < 2 {
        return Vec::new();
    }
    let haystack = lowercase_chars(text);
    if haystack.len() < needle.len() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut idx = 0;
    while idx + needle.len() <= haystack.len() {
        if haystack[idx..idx + needle.len()] == needle[..] {
            spans.push([idx, idx + needle.len() - 1]);
            idx += needle.len();
        } else {
            idx += 1;
        }
    }
    spans
}

/// Pick the spans a hit carries.
///
/// Literal occurrences win when there are any and the score is within the
/// best tier. Otherwise the matcher's runs, merged; if merging somehow leaves
/// nothing, the raw runs are kept so the hit still shows something.
pub fn resolve_spans(text: &str, query: &str, score: f64, fuzzy: &[Span]) -> Vec<Span> {
    if score <= TIER1_THRESHOLD {
        let literal = find_literal_spans(text, query);
        if !literal.is_empty() {
            return literal;
        }
    }

    let merged = merge_spans(fuzzy);
    if merged.is_empty() && !fuzzy.is_empty() {
        return fuzzy.to_vec();
    }
    merged
}
