// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Builders for the single-video and playlist indexes.
//!
//! Both decode HTML entities before indexing, so the text a hit carries (and
//! the offsets its spans point at) is the decoded text, not the scraped one.
//! Neither can fail: absent or empty input means "no index", and a transcript
//! without content simply contributes nothing.

use crate::fuzzy::{FuzzyIndex, IndexOptions, Searchable};
use crate::types::{PlaylistSearchSegment, Provenance, Transcript, TranscriptSegment};
use crate::util::normalize::decode_html_entities;

/// Index over one transcript's segments.
pub type SingleIndex = FuzzyIndex<TranscriptSegment>;

/// Index over every segment of a playlist.
pub type PlaylistIndex = FuzzyIndex<PlaylistSearchSegment>;

/// A record the query engine can turn into a hit.
pub trait IndexedSegment: Searchable {
    fn segment(&self) -> &TranscriptSegment;

    /// Where the segment came from, if it belongs to a playlist.
    fn provenance(&self) -> Option<Provenance>;
}

impl Searchable for TranscriptSegment {
    fn text(&self) -> &str {
        &self.text
    }
}

impl IndexedSegment for TranscriptSegment {
    fn segment(&self) -> &TranscriptSegment {
        self
    }

    fn provenance(&self) -> Option<Provenance> {
        None
    }
}

impl Searchable for PlaylistSearchSegment {
    fn text(&self) -> &str {
        &self.segment.text
    }
}

impl IndexedSegment for PlaylistSearchSegment {
    fn segment(&self) -> &TranscriptSegment {
        &self.segment
    }

    fn provenance(&self) -> Option<Provenance> {
        Some(Provenance {
            source_video_id: self.source_video_id.clone(),
            source_video_title: self.source_video_title.clone(),
            actual_youtube_id: self.actual_youtube_id.clone(),
            video_order: self.video_order,
        })
    }
}

/// Build the single-video index.
///
/// Returns `None` for absent or empty input, which callers treat as "clear".
pub fn build_single_index(
    segments: Option<&[TranscriptSegment]>,
    options: &IndexOptions,
) -> Option<SingleIndex> {
    let segments = segments.filter(|s| !s.is_empty())?;

    let records = segments
        .iter()
        .map(|seg| TranscriptSegment {
            text: decode_html_entities(&seg.text),
            ..seg.clone()
        })
        .collect();

    Some(FuzzyIndex::new(records, options.clone()))
}

/// Flatten a playlist into tagged segments, in collection then time order.
pub fn flatten_playlist(transcripts: &[Transcript]) -> Vec<PlaylistSearchSegment> {
    transcripts
        .iter()
        .enumerate()
        .flat_map(|(video_order, transcript)| {
            transcript
                .content
                .iter()
                .map(move |seg| PlaylistSearchSegment {
                    segment: TranscriptSegment {
                        text: decode_html_entities(&seg.text),
                        ..seg.clone()
                    },
                    source_video_id: transcript.id.clone(),
                    source_video_title: transcript.title.clone(),
                    actual_youtube_id: transcript.video_id.clone(),
                    video_order,
                })
        })
        .collect()
}

/// Build the playlist index.
///
/// Returns `None` for absent or empty input. A non-empty playlist whose
/// transcripts are all empty still yields an (empty) index.
pub fn build_playlist_index(
    transcripts: Option<&[Transcript]>,
    options: &IndexOptions,
) -> Option<PlaylistIndex> {
    let transcripts = transcripts.filter(|t| !t.is_empty())?;
    let records = flatten_playlist(transcripts);
    Some(FuzzyIndex::new(records, options.clone()))
}
