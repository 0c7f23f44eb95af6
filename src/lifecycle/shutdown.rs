//! Shutdown coordination.
//!
//! A latched flag on a `watch` channel: once triggered it stays triggered, so
//! a task that subscribes after the fact still stops.

use std::sync::Arc;

use tokio::sync::watch;

/// Owner side. Clones share one flag.
#[derive(Debug, Clone)]
pub struct Shutdown {
    state: Arc<watch::Sender<bool>>,
}

/// Listener side handed to long-running tasks.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    state: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state: Arc::new(state),
        }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            state: self.state.subscribe(),
        }
    }

    /// Latch the flag. Idempotent.
    pub fn trigger(&self) {
        self.state.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.state.borrow()
    }

    /// Number of live [`ShutdownSignal`]s.
    pub fn receiver_count(&self) -> usize {
        self.state.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Resolve once shutdown is triggered or every [`Shutdown`] is dropped.
    pub async fn recv(mut self) {
        let _ = self.state.wait_for(|triggered| *triggered).await;
    }
}
