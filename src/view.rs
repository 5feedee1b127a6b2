// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display-ready results.
//!
//! Single-video hits carry no provenance of their own; they belong to the
//! transcript that was selected when the index was built, so a [`HitView`]
//! fills the gaps from that transcript.

use serde::Serialize;

use crate::scoring::tier_for;
use crate::types::{SearchHit, Span, Transcript};
use crate::util::format::{format_timestamp, youtube_url};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HitView {
    pub text: String,
    pub start: f64,
    pub duration: f64,
    pub score: f64,
    pub tier: u8,
    pub match_indices: Vec<Span>,
    pub source_video_id: String,
    pub source_video_title: String,
    /// YouTube id, for the deep link.
    pub actual_video_id: String,
    /// Position in the hit list it came from.
    pub ref_index: usize,
    pub timestamp: String,
    pub url: String,
}

impl HitView {
    /// Map one hit, taking missing provenance from `selected`.
    pub fn from_hit(
        hit: &SearchHit,
        ref_index: usize,
        selected: Option<&Transcript>,
        render_down: bool,
    ) -> Self {
        let actual_video_id = own_or(&hit.actual_youtube_id, selected.map(|t| &t.video_id));
        Self {
            text: hit.text.clone(),
            start: hit.start,
            duration: hit.duration,
            score: hit.score,
            tier: tier_for(hit.score, render_down),
            match_indices: hit.match_indices.clone(),
            source_video_id: own_or(&hit.source_video_id, selected.map(|t| &t.id)),
            source_video_title: own_or(&hit.source_video_title, selected.map(|t| &t.title)),
            url: youtube_url(&actual_video_id, hit.start),
            actual_video_id,
            ref_index,
            timestamp: format_timestamp(hit.start),
        }
    }

    pub fn from_hits(
        hits: &[SearchHit],
        selected: Option<&Transcript>,
        render_down: bool,
    ) -> Vec<Self> {
        hits.iter()
            .enumerate()
            .map(|(i, hit)| Self::from_hit(hit, i, selected, render_down))
            .collect()
    }
}

fn own_or(own: &Option<String>, fallback: Option<&String>) -> String {
    match own {
        Some(value) if !value.is_empty() => value.clone(),
        _ => fallback.cloned().unwrap_or_default(),
    }
}

/// Group views by source video, groups in order of first appearance.
pub fn group_by_video(views: &[HitView]) -> Vec<(&str, Vec<&HitView>)> {
    let mut groups: Vec<(&str, Vec<&HitView>)> = Vec::new();
    for view in views {
        match groups.iter_mut().find(|g| g.0 == view.source_video_id) {
            Some((_, members)) => members.push(view),
            None => groups.push((view.source_video_id.as_str(), vec![view])),
        }
    }
    groups
}
