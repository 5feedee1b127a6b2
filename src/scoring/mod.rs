// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how hits get their tier and their place in the list.
//!
//! The key insight is that the tier dominates everything else. A tier 0 hit at
//! the end of the last video beats a tier 1 hit in the first second of the
//! first. Within a tier, playlist order and then time decide.

mod core;
pub mod ranking;

pub use self::core::*;
