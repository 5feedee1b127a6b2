// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing and presentation helpers.
//!
//! Text normalization for case- and accent-insensitive matching, plus the
//! timestamp and deep-link formatting the result views need.

pub mod format;
pub mod normalize;
