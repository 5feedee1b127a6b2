// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search worker: a dedicated thread that owns a [`SearchEngine`].
//!
//! Requests are handled one at a time, in arrival order, each to completion.
//! Matching is CPU-bound and synchronous, so the worker lives on its own OS
//! thread rather than on the async runtime; it talks to the rest of the
//! program only through two unbounded channels.
//!
//! A request that can't be decoded gets an `error` response. A request that
//! panics is a fault: the worker reports it once and exits, taking its
//! indexes with it. Recovery is the client's job.

use std::any::Any;
use std::fmt;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use serde_json::Value;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, warn};

use crate::config::EngineConfig;
use crate::search::SearchEngine;
use crate::types::SearchMode;

use super::protocol::{decode_request, error_response, Request, Response};

/// Everything the worker can tell its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerEvent {
    Message(Response),
    /// The worker died. Carries the panic message. Always the last event.
    Fault(String),
}

/// Runs inside the worker before each decoded request is executed.
///
/// Only used to inject faults from tests.
#[doc(hidden)]
pub type RequestHook = Arc<dyn Fn(&Request) + Send + Sync>;

/// The owner's end of a running worker.
pub struct WorkerHandle {
    requests: UnboundedSender<Value>,
    events: UnboundedReceiver<WorkerEvent>,
    thread: Option<JoinHandle<()>>,
}

impl fmt::Debug for WorkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerHandle")
            .field("closed", &self.requests.is_closed())
            .finish_non_exhaustive()
    }
}

impl WorkerHandle {
    /// Queue a raw message. Fails only once the worker has exited.
    pub fn post(&self, message: Value) -> Result<(), Value> {
        self.requests.send(message).map_err(|e| e.0)
    }

    /// Next event from the worker, or `None` once it has exited and every
    /// event has been read.
    pub async fn next_event(&mut self) -> Option<WorkerEvent> {
        self.events.recv().await
    }

    /// Split into the request sender and the event receiver. The worker
    /// thread is detached; it exits when the sender is dropped.
    pub fn into_parts(self) -> (UnboundedSender<Value>, UnboundedReceiver<WorkerEvent>) {
        let WorkerHandle {
            requests, events, ..
        } = self;
        (requests, events)
    }

    /// Close the request channel and wait for the worker thread to finish.
    pub fn shutdown(self) {
        let WorkerHandle {
            requests,
            events,
            thread,
        } = self;
        drop(requests);
        drop(events);
        if let Some(thread) = thread {
            if thread.join().is_err() {
                warn!("search worker thread ended abnormally");
            }
        }
    }
}

/// Spawns search workers.
pub struct SearchWorker;

impl SearchWorker {
    pub fn spawn(config: EngineConfig) -> io::Result<WorkerHandle> {
        Self::spawn_inner(config, None)
    }

    #[doc(hidden)]
    pub fn spawn_with_hook(config: EngineConfig, hook: RequestHook) -> io::Result<WorkerHandle> {
        Self::spawn_inner(config, Some(hook))
    }

    fn spawn_inner(config: EngineConfig, hook: Option<RequestHook>) -> io::Result<WorkerHandle> {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let thread = thread::Builder::new()
            .name("clipfind-search".to_string())
            .spawn(move || {
                let engine = SearchEngine::new(config);
                run(engine, request_rx, event_tx, hook.as_deref());
            })?;

        Ok(WorkerHandle {
            requests: request_tx,
            events: event_rx,
            thread: Some(thread),
        })
    }
}

fn run(
    engine: SearchEngine,
    mut requests: UnboundedReceiver<Value>,
    events: UnboundedSender<WorkerEvent>,
    hook: Option<&(dyn Fn(&Request) + Send + Sync)>,
) {
    let ready = WorkerEvent::Message(Response::WorkerReady);
    if events.send(ready).is_err() {
        return;
    }
    debug!("search worker ready");

    while let Some(message) = requests.blocking_recv() {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| handle(&engine, &message, hook)));
        match outcome {
            Ok(Some(response)) => {
                if events.send(WorkerEvent::Message(response)).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                error!(%reason, "search worker faulted");
                let _ = events.send(WorkerEvent::Fault(reason));
                return;
            }
        }
    }

    debug!("search worker stopped");
}

fn handle(
    engine: &SearchEngine,
    message: &Value,
    hook: Option<&(dyn Fn(&Request) + Send + Sync)>,
) -> Option<Response> {
    let request = match decode_request(message) {
        Ok(request) => request,
        Err(err) => {
            warn!(%err, "worker rejected message");
            return error_response(&err);
        }
    };

    if let Some(hook) = hook {
        hook(&request);
    }

    Some(execute(engine, request))
}

fn execute(engine: &SearchEngine, request: Request) -> Response {
    match request {
        Request::Init(p) => {
            engine.build_single_index(p.segments.as_deref());
            Response::Initialized {
                mode: SearchMode::Single,
                request_id: p.request_id,
            }
        }
        Request::InitPlaylist(p) => {
            engine.build_playlist_index(p.transcripts.as_deref());
            Response::Initialized {
                mode: SearchMode::Playlist,
                request_id: p.request_id,
            }
        }
        Request::SearchSingle(p) => Response::SearchSingleResults {
            payload: engine.query(&p.query, SearchMode::Single),
            request_id: p.request_id,
        },
        Request::SearchPlaylist(p) => Response::SearchPlaylistResults {
            payload: engine.query(&p.query, SearchMode::Playlist),
            request_id: p.request_id,
        },
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "search worker panicked".to_string()
    }
}
