// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hit ranking: how a result list gets sorted.
//!
//! The ranking is bucketed by tier, not by raw score. Two tier 0 hits with
//! scores 0.001 and 0.04 are equals; what separates them is where they sit in
//! the playlist and in time.

use std::cmp::Ordering;

use super::tier_for;
use crate::types::SearchHit;

/// Compare two hits for display order.
///
/// Sort order:
/// 1. **Tier** - ascending (see [`tier_for`] for what the direction flag does)
/// 2. **Video order** - ascending, only when both hits carry one, so a
///    playlist's videos stay in collection order
/// 3. **Start time** - ascending with `render_down`, descending otherwise
///
/// Hits that tie on all three compare equal; use a stable sort to keep the
/// matcher's order for them.
pub fn compare_hits(a: &SearchHit, b: &SearchHit, render_down: bool) -> Ordering {
    let tier_a = tier_for(a.score, render_down);
    let tier_b = tier_for(b.score, render_down);
    if tier_a != tier_b {
        return tier_a.cmp(&tier_b);
    }

    if let (Some(order_a), Some(order_b)) = (a.video_order, b.video_order) {
        if order_a != order_b {
            return order_a.cmp(&order_b);
        }
    }

    if render_down {
        a.start.total_cmp(&b.start)
    } else {
        b.start.total_cmp(&a.start)
    }
}

/// Stable sort in display order.
pub fn sort_hits(hits: &mut [SearchHit], render_down: bool) {
    hits.sort_by(|a, b| compare_hits(a, b, render_down));
}
