// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via bit-parallel approximate matching.
//!
//! `bitap` is the matcher itself, `index` runs it over a record list, and
//! `options` holds the tuning knobs with the two presets the transcript
//! indexes use.

pub mod bitap;
mod index;
mod options;

pub use index::{Candidate, FuzzyIndex, Searchable};
pub use options::IndexOptions;
