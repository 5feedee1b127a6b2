// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```json
//! { "playlistLimit": 200, "single": { "threshold": 0.25 } }
//! ```
//!
//! Note that a nested options object replaces the *whole* default for that
//! mode's unnamed fields with [`IndexOptions::default`], which is the
//! single-video preset. Name `threshold` and `distance` when overriding the
//! playlist options.

use serde::{Deserialize, Serialize};

use crate::fuzzy::IndexOptions;
use crate::scoring::{PLAYLIST_RESULT_LIMIT, RENDER_DOWN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Matcher options for the single-video index.
    pub single: IndexOptions,
    /// Matcher options for the playlist index.
    pub playlist: IndexOptions,
    /// Most candidates a playlist query keeps.
    pub playlist_limit: usize,
    /// Most relevant first (and earliest first) when true.
    pub render_down: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            single: IndexOptions::single(),
            playlist: IndexOptions::playlist(),
            playlist_limit: PLAYLIST_RESULT_LIMIT,
            render_down: RENDER_DOWN,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON config.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(
            EngineConfig::from_json("{}").unwrap(),
            EngineConfig::default()
        );
    }

    #[test]
    fn test_partial_override() {
        let config =
            EngineConfig::from_json(r#"{"playlistLimit": 20, "renderDown": false}"#).unwrap();
        assert_eq!(config.playlist_limit, 20);
        assert!(!config.render_down);
        assert_eq!(config.playlist, IndexOptions::playlist());
    }

    #[test]
    fn test_nested_override() {
        let config = EngineConfig::from_json(r#"{"single": {"threshold": 0.1}}"#).unwrap();
        assert_eq!(config.single.threshold, 0.1);
        assert_eq!(config.single.distance, IndexOptions::single().distance);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(EngineConfig::from_json(r#"{"playlistLimit": "lots"}"#).is_err());
    }
}
