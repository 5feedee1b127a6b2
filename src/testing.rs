// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Transcript, TranscriptSegment};

/// Seconds between consecutive segments built by [`make_transcript`].
pub const SEGMENT_SPACING: f64 = 5.0;

/// A segment with a fixed one-second duration.
pub fn make_segment(text: &str, start: f64) -> TranscriptSegment {
    TranscriptSegment::new(text, start, 1.0)
}

/// Segments spaced [`SEGMENT_SPACING`] seconds apart, starting at zero.
pub fn make_segments(lines: &[&str]) -> Vec<TranscriptSegment> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| TranscriptSegment::new(*line, i as f64 * SEGMENT_SPACING, SEGMENT_SPACING))
        .collect()
}

/// A transcript titled `"Title of {id}"` with one segment per line.
pub fn make_transcript(id: &str, video_id: &str, lines: &[&str]) -> Transcript {
    Transcript {
        id: id.to_string(),
        title: format!("Title of {}", id),
        video_id: video_id.to_string(),
        channel_name: "Test Channel".to_string(),
        subscribers: "1K".to_string(),
        thumbnail: None,
        icon: None,
        duration: "10:00".to_string(),
        date_posted: "2025-01-01".to_string(),
        content: make_segments(lines),
    }
}

/// `count` transcripts `video0..`, each with the same lines.
pub fn make_playlist(count: usize, lines: &[&str]) -> Vec<Transcript> {
    (0..count)
        .map(|i| make_transcript(&format!("video{}", i), &format!("yt{}", i), lines))
        .collect()
}
