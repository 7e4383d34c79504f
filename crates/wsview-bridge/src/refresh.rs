//! "Data changed" notification for observers of the workspace list.

use std::sync::Arc;

use tokio::sync::watch;

/// Generation counter bumped on every refresh request.
///
/// Firing never fetches anything; observers react by re-listing.
#[derive(Debug, Clone)]
pub struct RefreshSignal {
    tx: Arc<watch::Sender<u64>>,
}

impl RefreshSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    pub fn fire(&self) {
        self.tx.send_modify(|generation| *generation = generation.wrapping_add(1));
        tracing::debug!(generation = *self.tx.borrow(), "refresh requested");
    }

    pub fn generation(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Receiver that wakes on every subsequent `fire`.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}
