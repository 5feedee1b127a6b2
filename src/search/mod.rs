// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! The engine runs the fuzzy matcher over whichever index the query names,
//! decides what each hit should highlight, and hands back a list in display
//! order. Nothing here blocks on anything but the index locks, and those are
//! only held long enough to clone an `Arc`.

mod engine;
pub mod highlight;

pub use engine::SearchEngine;
pub use highlight::{find_literal_spans, merge_spans, resolve_spans};
