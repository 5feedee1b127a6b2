// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks: transcripts, their segments, and what a search returns.
//!
//! Everything here crosses the worker boundary as JSON, so field names follow
//! the camelCase shape the presentation layer already speaks (`videoId`,
//! `matchIndices`, `actualYouTubeId`). Rust-side names stay snake_case.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **TranscriptSegment**: immutable once loaded. Order inside a transcript is
//!   chronological and survives indexing untouched.
//!
//! - **PlaylistSearchSegment**: `video_order` is the owning transcript's position
//!   in the collection the playlist index was built from. It is the only
//!   tie-breaker that keeps one video's hits together.
//!
//! - **SearchHit**: `match_indices` are inclusive `[start, end]` character
//!   offsets into `text`. `video_order.is_some()` iff the hit came from the
//!   playlist index.

use serde::{Deserialize, Serialize};

// =============================================================================
// TRANSCRIPTS
// =============================================================================

/// One timed line of a transcript.
///
/// Every field defaults when missing. A segment without text indexes as blank
/// and never matches; one without a start time sits at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSegment {
    #[serde(default)]
    pub text: String,
    /// Start time in seconds.
    #[serde(default)]
    pub start: f64,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// A video's metadata plus its segments.
///
/// Nothing is required. The dataset is scraped and not every entry is
/// complete, so a missing field is empty rather than an error: a transcript
/// without `content` has zero segments, one without `id` still indexes under
/// an empty id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// YouTube's id for the video (what the player and deep links need).
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub subscribers: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub date_posted: String,
    #[serde(default)]
    pub content: Vec<TranscriptSegment>,
}

/// A segment flattened out of a playlist, tagged with where it came from.
///
/// Created only while building the playlist index, one per (transcript, segment)
/// pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSearchSegment {
    #[serde(flatten)]
    pub segment: TranscriptSegment,
    /// The owning transcript's `id`.
    pub source_video_id: String,
    pub source_video_title: String,
    /// The owning transcript's `videoId`.
    #[serde(rename = "actualYouTubeId")]
    pub actual_youtube_id: String,
    /// Position of the owning transcript in the playlist.
    pub video_order: usize,
}

// =============================================================================
// SEARCH
// =============================================================================

/// Which of the two live indexes a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Single,
    Playlist,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Single => "single",
            SearchMode::Playlist => "playlist",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive `[start, end]` character range into a hit's text.
pub type Span = [usize; 2];

/// Where a playlist hit came from. Absent for single-video hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub source_video_id: String,
    pub source_video_title: String,
    pub actual_youtube_id: String,
    pub video_order: usize,
}

/// One search result, ready for the rendering layer.
///
/// Ephemeral: produced per query and never retained by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub text: String,
    pub start: f64,
    pub duration: f64,
    /// Fuzzy score in `[0, 1]`, lower is better.
    pub score: f64,
    #[serde(default)]
    pub match_indices: Vec<Span>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_video_title: Option<String>,
    #[serde(
        default,
        rename = "actualYouTubeId",
        skip_serializing_if = "Option::is_none"
    )]
    pub actual_youtube_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_order: Option<usize>,
}

impl SearchHit {
    /// Build a hit from a matched segment and its optional provenance.
    pub fn new(
        segment: &TranscriptSegment,
        score: f64,
        match_indices: Vec<Span>,
        provenance: Option<Provenance>,
    ) -> Self {
        let mut hit = Self {
            text: segment.text.clone(),
            start: segment.start,
            duration: segment.duration,
            score,
            match_indices,
            source_video_id: None,
            source_video_title: None,
            actual_youtube_id: None,
            video_order: None,
        };
        if let Some(p) = provenance {
            hit.source_video_id = Some(p.source_video_id);
            hit.source_video_title = Some(p.source_video_title);
            hit.actual_youtube_id = Some(p.actual_youtube_id);
            hit.video_order = Some(p.video_order);
        }
        hit
    }

    /// The substrings covered by `match_indices`, for display and tests.
    pub fn highlighted(&self) -> Vec<String> {
        let chars: Vec<char> = self.text.chars().collect();
        self.match_indices
            .iter()
            .filter(|[s, e]| s <= e && *e < chars.len())
            .map(|[s, e]| chars[*s..=*e].iter().collect())
            .collect()
    }
}
