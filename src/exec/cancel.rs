// src/exec/cancel.rs

use std::sync::Arc;

use tokio::sync::watch;

/// Shared, sticky cancellation flag.
///
/// Clones observe the same flag, so one token can stop many in-flight runs
/// (e.g. on Ctrl-C). Once cancelled it stays cancelled: a run that was
/// interrupted leaves the flag set for any outer scope that checks it.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once [`cancel`](Self::cancel) has been called on any clone.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
