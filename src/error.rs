// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A worker message that could not be turned into a request.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Unknown message type: {kind}")]
    UnknownType {
        kind: String,
        request_id: Option<String>,
    },

    #[error("Malformed {kind} payload: {reason}")]
    MalformedPayload {
        kind: String,
        reason: String,
        request_id: Option<String>,
    },

    #[error("Message has no type field")]
    MissingType,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProtocolError {
    /// The request id carried by the offending message, when it had one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            ProtocolError::UnknownType { request_id, .. }
            | ProtocolError::MalformedPayload { request_id, .. } => request_id.as_deref(),
            ProtocolError::MissingType | ProtocolError::Json(_) => None,
        }
    }
}

/// Why a client call did not produce a result.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The worker answered with an error response.
    #[error("Worker error: {0}")]
    Worker(String),

    /// The worker faulted while this request was pending.
    #[error("Search worker crashed: {0}")]
    WorkerCrashed(String),

    /// The worker could not be started, or went away before answering.
    #[error("Search worker unavailable")]
    WorkerUnavailable,

    /// The worker answered with the wrong kind of response.
    #[error("Unexpected response for {request_id}: {kind}")]
    UnexpectedResponse { request_id: String, kind: String },

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Loading a transcript collection from disk.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid transcript JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No transcript with id or video id {0}")]
    UnknownVideo(String),

    #[error("Dataset contains no transcripts")]
    Empty,
}
