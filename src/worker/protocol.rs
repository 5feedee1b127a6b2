// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wire format between the client and the search worker.
//!
//! Requests carry their arguments and request id inside a `payload` object:
//!
//! ```json
//! { "type": "searchSingle", "payload": { "query": "rust", "requestId": "searchSingle-rust-7" } }
//! ```
//!
//! Responses are flat, with the type alongside everything else:
//!
//! ```json
//! { "type": "searchSingleResults", "payload": [ ... ], "requestId": "searchSingle-rust-7" }
//! ```
//!
//! | Request          | Response                                   |
//! |------------------|--------------------------------------------|
//! | `init`           | `initialized` with `mode: "single"`        |
//! | `initPlaylist`   | `initialized` with `mode: "playlist"`      |
//! | `searchSingle`   | `searchSingleResults`                      |
//! | `searchPlaylist` | `searchPlaylistResults`                    |
//! | anything else    | `error`, if a request id could be found    |
//!
//! `workerReady` is sent once at startup and answers nothing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::types::{SearchHit, SearchMode, Transcript, TranscriptSegment};

/// Request types the worker understands, as they appear on the wire.
pub const REQUEST_TYPES: [&str; 4] = ["init", "initPlaylist", "searchSingle", "searchPlaylist"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitPayload {
    /// `null` or empty clears the single-video index.
    #[serde(default)]
    pub segments: Option<Vec<TranscriptSegment>>,
    pub request_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitPlaylistPayload {
    /// `null` or empty clears the playlist index.
    #[serde(default)]
    pub transcripts: Option<Vec<Transcript>>,
    pub request_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub query: String,
    pub request_id: String,
}

/// A message from the client to the worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Request {
    Init(InitPayload),
    InitPlaylist(InitPlaylistPayload),
    SearchSingle(SearchPayload),
    SearchPlaylist(SearchPayload),
}

impl Request {
    /// The wire name of this request's type.
    pub fn kind(&self) -> &'static str {
        match self {
            Request::Init(_) => "init",
            Request::InitPlaylist(_) => "initPlaylist",
            Request::SearchSingle(_) => "searchSingle",
            Request::SearchPlaylist(_) => "searchPlaylist",
        }
    }

    pub fn request_id(&self) -> &str {
        match self {
            Request::Init(p) => &p.request_id,
            Request::InitPlaylist(p) => &p.request_id,
            Request::SearchSingle(p) | Request::SearchPlaylist(p) => &p.request_id,
        }
    }

    pub fn to_value(&self) -> Result<Value, ProtocolError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// A message from the worker to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Response {
    WorkerReady,
    Initialized {
        mode: SearchMode,
        #[serde(rename = "requestId")]
        request_id: String,
    },
    SearchSingleResults {
        payload: Vec<SearchHit>,
        #[serde(rename = "requestId")]
        request_id: String,
    },
    SearchPlaylistResults {
        payload: Vec<SearchHit>,
        #[serde(rename = "requestId")]
        request_id: String,
    },
    Error {
        message: String,
        #[serde(rename = "requestId")]
        request_id: String,
    },
}

impl Response {
    /// The request this answers. `None` only for `workerReady`.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Response::WorkerReady => None,
            Response::Initialized { request_id, .. }
            | Response::SearchSingleResults { request_id, .. }
            | Response::SearchPlaylistResults { request_id, .. }
            | Response::Error { request_id, .. } => Some(request_id),
        }
    }

    /// The wire name of this response's type.
    pub fn kind(&self) -> &'static str {
        match self {
            Response::WorkerReady => "workerReady",
            Response::Initialized { .. } => "initialized",
            Response::SearchSingleResults { .. } => "searchSingleResults",
            Response::SearchPlaylistResults { .. } => "searchPlaylistResults",
            Response::Error { .. } => "error",
        }
    }
}

/// Decode one inbound message.
///
/// Distinguishes an unknown `type` from a known type whose payload doesn't
/// fit, and recovers `payload.requestId` for both so the worker can answer.
pub fn decode_request(message: &Value) -> Result<Request, ProtocolError> {
    let kind = message
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ProtocolError::MissingType)?;

    let request_id = message
        .get("payload")
        .and_then(|p| p.get("requestId"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    if !REQUEST_TYPES.contains(&kind) {
        return Err(ProtocolError::UnknownType {
            kind: kind.to_owned(),
            request_id,
        });
    }

    Request::deserialize(message).map_err(|e| ProtocolError::MalformedPayload {
        kind: kind.to_owned(),
        reason: e.to_string(),
        request_id,
    })
}

/// [`decode_request`] from raw JSON text.
pub fn decode_request_str(json: &str) -> Result<Request, ProtocolError> {
    let value: Value = serde_json::from_str(json)?;
    decode_request(&value)
}

/// The error response for a message that could not be handled, if it carried
/// a request id to address it to.
pub fn error_response(err: &ProtocolError) -> Option<Response> {
    err.request_id().map(|id| Response::Error {
        message: err.to_string(),
        request_id: id.to_owned(),
    })
}
