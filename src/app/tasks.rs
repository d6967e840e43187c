//! Request dispatch
//!
//! API calls run as tokio tasks. Each task reports back exactly one
//! [`Action`] over an unbounded channel; the event loop drains the channel
//! and feeds the view-model. Tasks never touch view-model state.

use std::future::Future;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::CommitClient;
use crate::model::{CommitId, CommitPatch, NewCommit};
use crate::view_model::{Action, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
enum RequestKind {
    Load(RequestId),
    Delete(CommitId),
    Update(CommitId),
    Create,
}

#[derive(Debug)]
struct InFlight {
    kind: RequestKind,
    handle: JoinHandle<()>,
}

/// Spawns API requests and collects their completions
#[derive(Debug)]
pub struct Dispatcher {
    client: CommitClient,
    runtime: Handle,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Action>,
    in_flight: Vec<InFlight>,
    next_request: u64,
    cancel_superseded_loads: bool,
}

impl Dispatcher {
    pub fn new(client: CommitClient, runtime: Handle, cancel_superseded_loads: bool) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            runtime,
            tx,
            rx,
            in_flight: Vec::new(),
            next_request: 0,
            cancel_superseded_loads,
        }
    }

    pub fn client(&self) -> &CommitClient {
        &self.client
    }

    /// Number of requests that have not completed yet
    pub fn in_flight(&mut self) -> usize {
        self.prune();
        self.in_flight.len()
    }

    /// Start `GET /commits`.
    ///
    /// Returns the actions to apply right away: cancellations of superseded
    /// loads (only when configured), then `LoadStarted`.
    pub fn load(&mut self) -> Vec<Action> {
        self.prune();

        let mut actions = Vec::new();
        if self.cancel_superseded_loads {
            actions.extend(self.abort_matching(|kind| matches!(kind, RequestKind::Load(_))));
        }

        self.next_request += 1;
        let request = RequestId(self.next_request);
        let client = self.client.clone();
        tracing::debug!(request = request.0, "load requested");
        self.spawn(RequestKind::Load(request), async move {
            let result = client.list().await.map_err(|e| e.to_string());
            Action::LoadFinished { request, result }
        });

        actions.push(Action::LoadStarted(request));
        actions
    }

    /// Start `DELETE /commits/{id}`
    pub fn delete(&mut self, id: CommitId) {
        let client = self.client.clone();
        tracing::debug!(id = %id, "delete requested");
        self.spawn(RequestKind::Delete(id.clone()), async move {
            let result = client.delete(&id).await.map_err(|e| e.to_string());
            Action::DeleteFinished { id, result }
        });
    }

    /// Start `PUT /commits/{id}`
    pub fn update(&mut self, id: CommitId, patch: CommitPatch) {
        let client = self.client.clone();
        tracing::debug!(id = %id, "update requested");
        self.spawn(RequestKind::Update(id.clone()), async move {
            let result = client.update(&id, &patch).await.map_err(|e| e.to_string());
            Action::UpdateFinished { id, patch, result }
        });
    }

    /// Start `POST /commits`
    pub fn create(&mut self, commit: NewCommit) {
        let client = self.client.clone();
        tracing::debug!(header = %commit.header, "create requested");
        self.spawn(RequestKind::Create, async move {
            let result = client.create(&commit).await.map_err(|e| e.to_string());
            Action::CreateFinished(result)
        });
    }

    /// Completions received so far, in arrival order
    pub fn drain(&mut self) -> Vec<Action> {
        let mut completed = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            completed.push(action);
        }
        self.prune();
        completed
    }

    /// Wait for the next completion. `None` once nothing is outstanding.
    pub async fn next_completion(&mut self) -> Option<Action> {
        loop {
            if let Ok(action) = self.rx.try_recv() {
                return Some(action);
            }
            // A task only finishes after its send, so once nothing is in
            // flight every result is already queued.
            self.prune();
            if self.in_flight.is_empty() {
                return self.rx.try_recv().ok();
            }
            // `self.tx` keeps the channel open, so wait on the task itself
            let request = self.in_flight.remove(0);
            if let Err(e) = request.handle.await {
                tracing::debug!(kind = ?request.kind, error = %e, "request task ended early");
            }
        }
    }

    /// Abort everything outstanding (unmount). Returns the load
    /// cancellations to apply.
    pub fn cancel_all(&mut self) -> Vec<Action> {
        self.abort_matching(|_| true)
    }

    fn spawn<F>(&mut self, kind: RequestKind, request: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let tx = self.tx.clone();
        let handle = self.runtime.spawn(async move {
            let action = request.await;
            if tx.send(action).is_err() {
                tracing::debug!("completion dropped, receiver closed");
            }
        });
        self.in_flight.push(InFlight { kind, handle });
    }

    fn abort_matching(&mut self, predicate: impl Fn(&RequestKind) -> bool) -> Vec<Action> {
        let mut cancelled = Vec::new();
        self.in_flight.retain(|request| {
            if !predicate(&request.kind) {
                return true;
            }
            request.handle.abort();
            tracing::info!(kind = ?request.kind, "request cancelled");
            if let RequestKind::Load(id) = request.kind {
                cancelled.push(Action::LoadCancelled(id));
            }
            false
        });
        cancelled
    }

    fn prune(&mut self) {
        self.in_flight.retain(|request| !request.handle.is_finished());
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        for request in &self.in_flight {
            request.handle.abort();
        }
    }
}
