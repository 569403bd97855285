//! Shared state for the preview server.
//!
//! Holds the immutable render request and the live client registry. The
//! registry is the only concurrently mutated structure in the process and is
//! guarded with a parking_lot RwLock; broadcasts snapshot the sender set so
//! register/unregister/broadcast never iterate a half-mutated map.

use crate::render::RenderRequest;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// The single frame clients ever receive.
pub const RELOAD_EVENT: &str = "reload";

/// Per-client channel capacity. A handful of frames is plenty: a browser tab
/// that has fallen further behind than this is reloading anyway.
const CLIENT_CHANNEL_CAPACITY: usize = 8;

/// Shared preview server state.
pub struct DevServerState {
    /// What the document endpoint renders
    pub render: RenderRequest,

    /// Connected live-reload clients
    clients: RwLock<HashMap<usize, mpsc::Sender<String>>>,

    /// Next client ID
    next_client_id: RwLock<usize>,
}

impl DevServerState {
    pub fn new(render: RenderRequest) -> Self {
        Self {
            render,
            clients: RwLock::new(HashMap::new()),
            next_client_id: RwLock::new(0),
        }
    }

    /// Register a new live-reload client.
    ///
    /// The connection stays registered until the transport is observed closed;
    /// the server never drops it unilaterally.
    ///
    /// # Returns
    ///
    /// Client ID and the receiver feeding that client's event stream
    pub fn register_client(&self) -> (usize, mpsc::Receiver<String>) {
        let id = {
            let mut next_id = self.next_client_id.write();
            let id = *next_id;
            *next_id += 1;
            id
        };

        let (tx, rx) = mpsc::channel(CLIENT_CHANNEL_CAPACITY);
        self.clients.write().insert(id, tx);

        (id, rx)
    }

    /// Unregister a live-reload client.
    ///
    /// Must be called once the underlying transport reports closure, so the
    /// registry doesn't accumulate stale entries.
    pub fn unregister_client(&self, id: usize) {
        self.clients.write().remove(&id);
    }

    /// Broadcast a reload frame to every connected client.
    ///
    /// Delivery is best-effort and at-most-once per triggering change: a
    /// closed channel marks the client for removal, a full channel just drops
    /// the frame (the client is alive but behind, and an extra reload would
    /// be redundant). One failing connection never aborts delivery to the
    /// rest, and nothing propagates to the caller.
    ///
    /// # Returns
    ///
    /// Number of clients the frame was delivered to
    pub fn broadcast_reload(&self) -> usize {
        // Snapshot the senders so delivery happens outside the lock.
        let clients: Vec<(usize, mpsc::Sender<String>)> = self
            .clients
            .read()
            .iter()
            .map(|(id, tx)| (*id, tx.clone()))
            .collect();

        let mut delivered = 0;
        let mut stale_ids = Vec::new();

        for (id, tx) in clients {
            match tx.try_send(RELOAD_EVENT.to_string()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Closed(_)) => stale_ids.push(id),
                Err(TrySendError::Full(_)) => {}
            }
        }

        // Remove disconnected clients after iteration
        for id in stale_ids {
            self.unregister_client(id);
        }

        delivered
    }

    /// Get number of connected clients.
    pub fn client_count(&self) -> usize {
        self.clients.read().len()
    }
}

/// Shared state handle for passing around the application.
pub type SharedState = Arc<DevServerState>;
