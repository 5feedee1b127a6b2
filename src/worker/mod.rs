// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Off-thread search: the worker, its wire protocol, and the async client.
//!
//! The worker owns the indexes and does the matching; the client owns request
//! bookkeeping and fault recovery. They share nothing but two channels, so
//! the worker's state is only ever touched by the worker.

pub mod actor;
pub mod client;
pub mod protocol;

pub use actor::{SearchWorker, WorkerEvent, WorkerHandle};
pub use client::{next_request_id, QueryTicket, QueryTracker, SearchClient};
pub use protocol::{decode_request, Request, Response};
