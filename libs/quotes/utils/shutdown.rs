//! Graceful shutdown for the quote binaries

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::Notify;
use tracing::info;

#[derive(Debug, Default)]
struct ShutdownSignal {
    requested: AtomicBool,
    notify: Notify,
}

/// Shared stop flag set by Ctrl+C or by the application itself
#[derive(Debug, Clone, Default)]
pub struct ShutdownManager {
    signal: Arc<ShutdownSignal>,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a Ctrl+C handler that requests shutdown
    pub fn spawn_signal_handler(&self) {
        let manager = self.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("Received shutdown signal (Ctrl+C)");
                manager.trigger();
            }
        });
    }

    /// Request shutdown and wake every sleeper
    pub fn trigger(&self) {
        if !self.signal.requested.swap(true, Ordering::AcqRel) {
            info!("Shutting down gracefully...");
        }
        self.signal.notify.notify_waiters();
    }

    pub fn is_running(&self) -> bool {
        !self.signal.requested.load(Ordering::Acquire)
    }

    /// Sleep for a duration, waking early on shutdown
    ///
    /// Returns `false` when woken by shutdown.
    pub async fn interruptible_sleep(&self, duration: Duration) -> bool {
        let notified = self.signal.notify.notified();
        if !self.is_running() {
            return false;
        }

        tokio::select! {
            _ = tokio::time::sleep(duration) => self.is_running(),
            _ = notified => false,
        }
    }
}
