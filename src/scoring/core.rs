// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tier thresholds and the score-to-tier mapping.
//!
//! Scores come from the fuzzy matcher: 0 is a perfect match, 1 is no match.
//! The thresholds cut that range into three relevance tiers.
//!
//! | Tier | Score range     | Meaning                                 |
//! |------|-----------------|-----------------------------------------|
//! | 0    | `[0, 0.05)`     | Literal or near-literal match           |
//! | 1    | `[0.05, 0.2)`   | One typo in a long word                 |
//! | 2    | `[0.2, 1]`      | Weak match, still under the index cut   |
//!
//! Tier numbers are sort keys, not ranks: with the render direction flipped
//! the most relevant tier becomes 2 and sorts last.

/// Upper bound (exclusive) of the most relevant tier. Also the playlist
/// index's match threshold and the literal-highlight cutoff.
pub const TIER1_THRESHOLD: f64 = 0.05;

/// Upper bound (exclusive) of the middle tier.
pub const TIER2_THRESHOLD: f64 = 0.2;

/// Weakest score the single-video index accepts at all.
pub const TIER3_THRESHOLD: f64 = 0.3;

/// Playlist queries keep at most this many candidates.
pub const PLAYLIST_RESULT_LIMIT: usize = 500;

/// Default render direction: most relevant first, earliest first.
pub const RENDER_DOWN: bool = true;

/// Map a score to its sort tier.
///
/// With `render_down` the most relevant tier is 0; otherwise the outer tiers
/// swap so the most relevant hits sort to the bottom.
#[inline]
pub fn tier_for(score: f64, render_down: bool) -> u8 {
    if score < TIER1_THRESHOLD {
        if render_down {
            0
        } else {
            2
        }
    } else if score < TIER2_THRESHOLD {
        1
    } else if render_down {
        2
    } else {
        0
    }
}
