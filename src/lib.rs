// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search over video transcripts, run off-thread behind a message-passing
//! worker.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│   index/     │────▶│   search/    │
//! │ (Transcript,│     │ (single and  │     │ (engine,     │
//! │  SearchHit) │     │  playlist)   │     │  highlight)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │   fuzzy/     │     │  scoring/    │
//!                     │ (bitap, per- │     │ (tiers and   │
//!                     │  record idx) │     │  ordering)   │
//!                     └──────────────┘     └──────────────┘
//!                                                 │
//!                                                 ▼
//!                     ┌──────────────────────────────────────┐
//!                     │               worker/                │
//!                     │  (protocol, worker thread, client)   │
//!                     └──────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use clipfind::{SearchClient, EngineConfig};
//!
//! let client = SearchClient::new(EngineConfig::default());
//! client.init_single(Some(transcript.content.clone())).await?;
//! let hits = client.search_single("quick").await?;
//! ```
//!
//! The engine can also be used directly, without a worker:
//!
//! ```ignore
//! let engine = clipfind::SearchEngine::default();
//! engine.build_single_index(Some(&segments));
//! let hits = engine.query("quick", clipfind::SearchMode::Single);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;
pub mod view;
pub mod worker;

pub use config::EngineConfig;
pub use error::{ClientError, DatasetError, ProtocolError};
pub use fuzzy::{FuzzyIndex, IndexOptions};
pub use index::{build_playlist_index, build_single_index, PlaylistIndex, SingleIndex};
pub use scoring::ranking::{compare_hits, sort_hits};
pub use scoring::{
    tier_for, PLAYLIST_RESULT_LIMIT, TIER1_THRESHOLD, TIER2_THRESHOLD, TIER3_THRESHOLD,
};
pub use search::{find_literal_spans, merge_spans, resolve_spans, SearchEngine};
pub use types::{
    PlaylistSearchSegment, Provenance, SearchHit, SearchMode, Span, Transcript, TranscriptSegment,
};
pub use util::format::{format_timestamp, youtube_url};
pub use util::normalize::decode_html_entities;
pub use worker::{
    decode_request, QueryTicket, QueryTracker, Request, Response, SearchClient, SearchWorker,
    WorkerEvent, WorkerHandle,
};
