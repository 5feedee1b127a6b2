// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matcher tuning, and the two presets the transcript indexes use.

use serde::{Deserialize, Serialize};

use crate::scoring::{TIER1_THRESHOLD, TIER3_THRESHOLD};

/// How an index matches and scores.
///
/// Scores are always computed. `threshold` is the worst score (0 = perfect,
/// 1 = anything) the matcher accepts; the tier rules re-filter later, which is
/// why the single-video preset accepts fairly weak matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexOptions {
    /// Report the character runs that matched.
    pub include_matches: bool,
    /// Sort candidates by score. Off keeps input (chronological) order.
    pub should_sort: bool,
    /// Shortest matched run worth reporting. A record with no run this long
    /// does not match at all.
    pub min_match_char_length: usize,
    pub threshold: f64,
    /// How far from `location` a match may drift before it scores 1.0.
    /// Irrelevant while `ignore_location` is set.
    pub distance: usize,
    /// Where in the text a match is expected to start.
    pub location: usize,
    pub ignore_location: bool,
    pub case_sensitive: bool,
    pub ignore_diacritics: bool,
    /// Keep scanning after a perfect match so every matching run is marked.
    pub find_all_matches: bool,
    /// Skip the shorter-texts-score-better adjustment.
    pub ignore_field_norm: bool,
}

impl IndexOptions {
    /// Tuning for one video's transcript.
    pub fn single() -> Self {
        Self {
            include_matches: true,
            should_sort: false,
            min_match_char_length: 2,
            threshold: TIER3_THRESHOLD,
            distance: 100,
            location: 0,
            ignore_location: true,
            case_sensitive: false,
            ignore_diacritics: true,
            find_all_matches: true,
            ignore_field_norm: true,
        }
    }

    /// Tuning for the whole playlist.
    ///
    /// Stricter threshold: without a literal pre-filter, cross-video recall at
    /// 0.3 is mostly noise.
    pub fn playlist() -> Self {
        Self {
            threshold: TIER1_THRESHOLD,
            distance: 150,
            ..Self::single()
        }
    }
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self::single()
    }
}
