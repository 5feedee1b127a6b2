// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading transcript collections from JSON files.
//!
//! A file holds either an array of transcripts or a single transcript object.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::DatasetError;
use crate::types::Transcript;

#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Many(Vec<Transcript>),
    One(Box<Transcript>),
}

/// Read every transcript in `path`.
pub fn load_transcripts(path: &Path) -> Result<Vec<Transcript>, DatasetError> {
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let transcripts = parse_transcripts(&raw).map_err(|source| DatasetError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), transcripts = transcripts.len(), "loaded dataset");
    Ok(transcripts)
}

/// Parse transcripts from JSON text.
pub fn parse_transcripts(json: &str) -> Result<Vec<Transcript>, serde_json::Error> {
    Ok(match serde_json::from_str(json)? {
        DatasetFile::Many(all) => all,
        DatasetFile::One(one) => vec![*one],
    })
}

/// The transcript whose `id` or `videoId` is `wanted`, or the first one.
pub fn select_transcript<'a>(
    transcripts: &'a [Transcript],
    wanted: Option<&str>,
) -> Result<&'a Transcript, DatasetError> {
    match wanted {
        Some(key) => transcripts
            .iter()
            .find(|t| t.id == key || t.video_id == key)
            .ok_or_else(|| DatasetError::UnknownVideo(key.to_string())),
        None => transcripts.first().ok_or(DatasetError::Empty),
    }
}
