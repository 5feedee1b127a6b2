// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The caller's side of the worker: request ids, the pending table, and
//! recovery after a fault.
//!
//! # Lifecycle
//!
//! ```text
//!   first call ──▶ spawn worker ──▶ wait for workerReady ──▶ connected
//!                                                              │
//!          fault: reject every pending call, drop connection ◀─┘
//!                                                              │
//!   next call ──▶ spawn a fresh worker (indexes start empty) ◀─┘
//! ```
//!
//! Every call gets a unique request id and a oneshot channel parked in the
//! pending table. A dispatcher task reads worker events and resolves entries
//! by id. Responses may arrive in any order; nothing is cancelled and nothing
//! times out. Deciding whether a result is still wanted is up to the caller,
//! see [`QueryTracker`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::sync::{oneshot, Mutex as AsyncMutex};
use tracing::{debug, error, warn};

use crate::config::EngineConfig;
use crate::error::ClientError;
use crate::types::{SearchHit, SearchMode, Transcript, TranscriptSegment};

use super::actor::{RequestHook, SearchWorker, WorkerEvent};
use super::protocol::{InitPayload, InitPlaylistPayload, Request, Response, SearchPayload};

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A fresh request id: `{type}-{discriminator}-{n}`, with `n` increasing
/// across the whole process.
pub fn next_request_id(kind: &str, discriminator: &str) -> String {
    let n = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
    format!("{}-{}-{}", kind, discriminator, n)
}

type Reply = oneshot::Sender<Result<Response, ClientError>>;

#[derive(Default)]
struct PendingTable {
    entries: HashMap<String, Reply>,
    closed: bool,
}

impl PendingTable {
    /// Park a reply. Refused once the connection is dead, so nothing can wait
    /// on a worker that will never answer.
    fn insert(&mut self, id: String, reply: Reply) -> Result<(), ClientError> {
        if self.closed {
            return Err(ClientError::WorkerUnavailable);
        }
        self.entries.insert(id, reply);
        Ok(())
    }

    fn fail_all(&mut self, err: impl Fn() -> ClientError) {
        self.closed = true;
        for (id, reply) in self.entries.drain() {
            warn!(request_id = %id, "failing pending request");
            let _ = reply.send(Err(err()));
        }
    }
}

struct Connection {
    requests: UnboundedSender<Value>,
    pending: Arc<Mutex<PendingTable>>,
    alive: Arc<AtomicBool>,
}

impl Connection {
    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

/// Async front end to a lazily started search worker.
pub struct SearchClient {
    config: EngineConfig,
    hook: Option<RequestHook>,
    connection: AsyncMutex<Option<Arc<Connection>>>,
    spawned: AtomicUsize,
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SearchClient {
    /// No worker is started until the first call.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            hook: None,
            connection: AsyncMutex::new(None),
            spawned: AtomicUsize::new(0),
        }
    }

    /// A client whose workers run `hook` before every request.
    #[doc(hidden)]
    pub fn with_request_hook(config: EngineConfig, hook: RequestHook) -> Self {
        Self {
            hook: Some(hook),
            ..Self::new(config)
        }
    }

    /// Build (or clear, with `None` or an empty list) the single-video index.
    pub async fn init_single(
        &self,
        segments: Option<Vec<TranscriptSegment>>,
    ) -> Result<(), ClientError> {
        let request = Request::Init(InitPayload {
            segments,
            request_id: next_request_id("init", SearchMode::Single.as_str()),
        });
        self.expect_initialized(request, SearchMode::Single).await
    }

    /// Build (or clear, with `None` or an empty list) the playlist index.
    pub async fn init_playlist(
        &self,
        transcripts: Option<Vec<Transcript>>,
    ) -> Result<(), ClientError> {
        let request = Request::InitPlaylist(InitPlaylistPayload {
            transcripts,
            request_id: next_request_id("initPlaylist", SearchMode::Playlist.as_str()),
        });
        self.expect_initialized(request, SearchMode::Playlist).await
    }

    /// Query the single-video index. Blank queries answer `[]` locally.
    pub async fn search_single(&self, query: &str) -> Result<Vec<SearchHit>, ClientError> {
        self.search(query, SearchMode::Single).await
    }

    /// Query the playlist index. Blank queries answer `[]` locally.
    pub async fn search_playlist(&self, query: &str) -> Result<Vec<SearchHit>, ClientError> {
        self.search(query, SearchMode::Playlist).await
    }

    /// Whether a live worker is attached right now.
    pub async fn is_connected(&self) -> bool {
        self.connection
            .lock()
            .await
            .as_ref()
            .is_some_and(|conn| conn.is_alive())
    }

    /// How many workers this client has started so far.
    pub fn workers_spawned(&self) -> usize {
        self.spawned.load(Ordering::Relaxed)
    }

    async fn search(&self, query: &str, mode: SearchMode) -> Result<Vec<SearchHit>, ClientError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let search_payload = |kind: &str| SearchPayload {
            query: query.to_string(),
            request_id: next_request_id(kind, query),
        };
        let request = match mode {
            SearchMode::Single => Request::SearchSingle(search_payload("searchSingle")),
            SearchMode::Playlist => Request::SearchPlaylist(search_payload("searchPlaylist")),
        };

        let request_id = request.request_id().to_owned();
        match (mode, self.call(request).await?) {
            (SearchMode::Single, Response::SearchSingleResults { payload, .. })
            | (SearchMode::Playlist, Response::SearchPlaylistResults { payload, .. }) => {
                Ok(payload)
            }
            (_, other) => Err(ClientError::UnexpectedResponse {
                request_id,
                kind: other.kind().to_string(),
            }),
        }
    }

    async fn expect_initialized(
        &self,
        request: Request,
        mode: SearchMode,
    ) -> Result<(), ClientError> {
        let request_id = request.request_id().to_owned();
        match self.call(request).await? {
            Response::Initialized { mode: got, .. } if got == mode => Ok(()),
            other => Err(ClientError::UnexpectedResponse {
                request_id,
                kind: other.kind().to_string(),
            }),
        }
    }

    /// Post one request and wait for its response.
    async fn call(&self, request: Request) -> Result<Response, ClientError> {
        let conn = self.connection().await?;
        let id = request.request_id().to_owned();
        let message = request.to_value()?;

        let (reply, response) = oneshot::channel();
        conn.pending.lock().insert(id.clone(), reply)?;

        debug!(request_id = %id, kind = request.kind(), "posting request");
        if conn.requests.send(message).is_err() {
            conn.pending.lock().entries.remove(&id);
            return Err(ClientError::WorkerUnavailable);
        }

        response.await.map_err(|_| ClientError::WorkerUnavailable)?
    }

    /// The live connection, spawning a worker if there is none.
    ///
    /// Holds the connection lock across the ready wait, so concurrent first
    /// calls share one worker.
    async fn connection(&self) -> Result<Arc<Connection>, ClientError> {
        let mut slot = self.connection.lock().await;
        if let Some(conn) = slot.as_ref().filter(|c| c.is_alive()) {
            return Ok(Arc::clone(conn));
        }

        let handle = match &self.hook {
            Some(hook) => SearchWorker::spawn_with_hook(self.config.clone(), Arc::clone(hook)),
            None => SearchWorker::spawn(self.config.clone()),
        }
        .map_err(|err| {
            error!(%err, "failed to start search worker");
            ClientError::WorkerUnavailable
        })?;
        let generation = self.spawned.fetch_add(1, Ordering::Relaxed) + 1;

        let (requests, events) = handle.into_parts();
        let pending = Arc::new(Mutex::new(PendingTable::default()));
        let alive = Arc::new(AtomicBool::new(true));
        let (ready_tx, ready_rx) = oneshot::channel();

        tokio::spawn(dispatch(
            events,
            Arc::clone(&pending),
            Arc::clone(&alive),
            ready_tx,
        ));

        if ready_rx.await.is_err() {
            *slot = None;
            return Err(ClientError::WorkerUnavailable);
        }
        debug!(generation, "search worker connected");

        let conn = Arc::new(Connection {
            requests,
            pending,
            alive,
        });
        *slot = Some(Arc::clone(&conn));
        Ok(conn)
    }
}

/// Route worker events to their pending entries until the worker goes away.
async fn dispatch(
    mut events: UnboundedReceiver<WorkerEvent>,
    pending: Arc<Mutex<PendingTable>>,
    alive: Arc<AtomicBool>,
    ready: oneshot::Sender<()>,
) {
    let mut ready = Some(ready);

    while let Some(event) = events.recv().await {
        match event {
            WorkerEvent::Message(Response::WorkerReady) => {
                if let Some(ready) = ready.take() {
                    let _ = ready.send(());
                }
            }
            WorkerEvent::Message(response) => route(&pending, response),
            WorkerEvent::Fault(reason) => {
                error!(%reason, "search worker crashed; pending requests will fail");
                alive.store(false, Ordering::Release);
                pending
                    .lock()
                    .fail_all(|| ClientError::WorkerCrashed(reason.clone()));
                return;
            }
        }
    }

    alive.store(false, Ordering::Release);
    pending.lock().fail_all(|| ClientError::WorkerUnavailable);
}

fn route(pending: &Mutex<PendingTable>, response: Response) {
    let Some(id) = response.request_id() else {
        return;
    };

    let Some(reply) = pending.lock().entries.remove(id) else {
        warn!(request_id = %id, kind = response.kind(), "response for unknown request");
        return;
    };

    let result = match response {
        Response::Error { message, .. } => Err(ClientError::Worker(message)),
        other => Ok(other),
    };
    let _ = reply.send(result);
}

/// Tracks the most recent query so late responses can be recognized.
///
/// ```ignore
/// let ticket = tracker.issue("rust");
/// let hits = client.search_single("rust").await?;
/// if let Some(hits) = tracker.accept(&ticket, hits) { render(hits) }
/// ```
#[derive(Debug, Default)]
pub struct QueryTracker {
    latest: Mutex<QueryTicket>,
    issued: AtomicU64,
}

/// One issued query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTicket {
    seq: u64,
    query: String,
}

impl QueryTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl QueryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `query` as the latest one.
    pub fn issue(&self, query: &str) -> QueryTicket {
        let ticket = QueryTicket {
            seq: self.issued.fetch_add(1, Ordering::Relaxed) + 1,
            query: query.to_string(),
        };
        *self.latest.lock() = ticket.clone();
        ticket
    }

    /// The most recently issued query text.
    pub fn latest_query(&self) -> String {
        self.latest.lock().query.clone()
    }

    /// True while no newer query has been issued since `ticket`.
    pub fn is_current(&self, ticket: &QueryTicket) -> bool {
        self.latest.lock().seq == ticket.seq
    }

    /// `results` if `ticket` is still current, otherwise `None` (logged).
    pub fn accept<T>(&self, ticket: &QueryTicket, results: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(results)
        } else {
            warn!(query = %ticket.query, latest = %self.latest_query(), "discarding stale results");
            None
        }
    }
}
