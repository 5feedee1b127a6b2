// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: turning transcripts into something searchable.
//!
//! Two index kinds, one per search mode:
//! - **Single**: one video's segments, as-is
//! - **Playlist**: every video's segments flattened into one sequence, each
//!   tagged with the video it came from and that video's position

mod builder;

pub use builder::*;
