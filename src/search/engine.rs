// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: two index slots and the query pipeline over them.
//!
//! Each slot holds an `Arc` to an immutable index. A rebuild constructs the
//! new index without holding the lock, then swaps the pointer in. A query
//! clones the `Arc` and lets the lock go before matching, so it always sees
//! one whole index even if a rebuild lands mid-query.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::fuzzy::FuzzyIndex;
use crate::index::{self, IndexedSegment, PlaylistIndex, SingleIndex};
use crate::scoring::ranking::sort_hits;
use crate::types::{SearchHit, SearchMode, Transcript, TranscriptSegment};

use super::highlight::resolve_spans;

type Slot<T> = RwLock<Option<Arc<T>>>;

/// Holds the live indexes and answers queries against them.
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: EngineConfig,
    single: Slot<SingleIndex>,
    playlist: Slot<PlaylistIndex>,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            single: RwLock::new(None),
            playlist: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the single-video index. Absent or empty input clears it.
    pub fn build_single_index(&self, segments: Option<&[TranscriptSegment]>) {
        let built = index::build_single_index(segments, &self.config.single).map(Arc::new);
        match &built {
            Some(idx) => info!(segments = idx.len(), "built single-video index"),
            None => debug!("cleared single-video index"),
        }
        *self.single.write() = built;
    }

    /// Replace the playlist index. Absent or empty input clears it.
    pub fn build_playlist_index(&self, transcripts: Option<&[Transcript]>) {
        let built = index::build_playlist_index(transcripts, &self.config.playlist).map(Arc::new);
        match &built {
            Some(idx) => info!(
                videos = transcripts.map_or(0, <[Transcript]>::len),
                segments = idx.len(),
                "built playlist index"
            ),
            None => debug!("cleared playlist index"),
        }
        *self.playlist.write() = built;
    }

    /// Run `text` against the index for `mode`.
    ///
    /// Blank queries and missing indexes give an empty list, never an error.
    pub fn query(&self, text: &str, mode: SearchMode) -> Vec<SearchHit> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let hits = match mode {
            SearchMode::Single => match self.single.read().clone() {
                Some(idx) => self.run(&idx, text, None),
                None => return Vec::new(),
            },
            SearchMode::Playlist => match self.playlist.read().clone() {
                Some(idx) => self.run(&idx, text, Some(self.config.playlist_limit)),
                None => return Vec::new(),
            },
        };

        debug!(%mode, query = text, hits = hits.len(), "query complete");
        hits
    }

    pub fn has_index(&self, mode: SearchMode) -> bool {
        match mode {
            SearchMode::Single => self.single.read().is_some(),
            SearchMode::Playlist => self.playlist.read().is_some(),
        }
    }

    /// Records in the index for `mode`, 0 when there is none.
    pub fn index_len(&self, mode: SearchMode) -> usize {
        match mode {
            SearchMode::Single => self.single.read().as_ref().map_or(0, |idx| idx.len()),
            SearchMode::Playlist => self.playlist.read().as_ref().map_or(0, |idx| idx.len()),
        }
    }

    fn run<T: IndexedSegment>(
        &self,
        index: &FuzzyIndex<T>,
        text: &str,
        limit: Option<usize>,
    ) -> Vec<SearchHit> {
        let mut hits: Vec<SearchHit> = index
            .search(text, limit)
            .into_iter()
            .map(|candidate| {
                let segment = candidate.item.segment();
                let spans = resolve_spans(&segment.text, text, candidate.score, &candidate.indices);
                SearchHit::new(segment, candidate.score, spans, candidate.item.provenance())
            })
            .collect();

        sort_hits(&mut hits, self.config.render_down);
        hits
    }
}
