// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Timestamp and link formatting for result views.

/// Format seconds as `MM:SS`, or `H:MM:SS` once past the hour.
///
/// Fractional seconds are truncated, negative input clamps to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hrs = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;
    if hrs > 0 {
        format!("{}:{:02}:{:02}", hrs, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

/// YouTube watch URL that starts playback at `seconds`.
pub fn youtube_url(video_id: &str, seconds: f64) -> String {
    let t = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("https://www.youtube.com/watch?v={}&t={}s", video_id, t)
}
