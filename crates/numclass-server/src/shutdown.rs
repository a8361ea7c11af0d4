//! Graceful shutdown coordination.
//!
//! [`ShutdownSignal`] fans a single shutdown notification out to every
//! task that holds a clone; [`ConnectionTracker`] counts in-flight
//! connections so the accept loop can drain them before exiting.

use std::sync::Arc;

use tokio::sync::watch;

/// A cloneable signal used to trigger and await graceful shutdown.
///
/// # Example
///
/// ```rust
/// use numclass_server::ShutdownSignal;
///
/// let shutdown = ShutdownSignal::new();
/// assert!(!shutdown.is_shutdown());
///
/// shutdown.trigger();
/// assert!(shutdown.is_shutdown());
/// ```
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownSignal {
    /// Creates a new, untriggered signal.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Creates a signal wired to SIGTERM/SIGINT.
    #[must_use]
    pub fn with_os_signals() -> Self {
        let signal = Self::new();
        let trigger = signal.clone();

        tokio::spawn(async move {
            wait_for_os_signal().await;
            trigger.trigger();
        });

        signal
    }

    /// Triggers shutdown. Safe to call more than once.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    /// Returns `true` once shutdown has been triggered.
    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        *self.tx.borrow()
    }

    /// Waits until shutdown is triggered. Completes immediately if it
    /// already was.
    pub async fn recv(&self) {
        let mut rx = self.tx.subscribe();
        // wait_for checks the current value first, so a signal triggered
        // before this call still completes.
        let _ = rx.wait_for(|triggered| *triggered).await;
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Waits for SIGTERM or SIGINT (Ctrl+C on non-Unix platforms).
async fn wait_for_os_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let Ok(mut sigterm) = signal(SignalKind::terminate()) else {
            tracing::error!("Failed to register SIGTERM handler");
            return;
        };
        let Ok(mut sigint) = signal(SignalKind::interrupt()) else {
            tracing::error!("Failed to register SIGINT handler");
            return;
        };

        tokio::select! {
            _ = sigterm.recv() => tracing::info!("Received SIGTERM, shutting down"),
            _ = sigint.recv() => tracing::info!("Received SIGINT, shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C, shutting down");
        }
    }
}

/// Tracks active connections for shutdown draining.
///
/// Each connection holds a [`ConnectionGuard`]; dropping the guard
/// decrements the count, and [`ConnectionTracker::drained`] resolves once
/// it reaches zero.
#[derive(Debug, Clone)]
pub struct ConnectionTracker {
    count: Arc<watch::Sender<usize>>,
}

impl ConnectionTracker {
    /// Creates a tracker with no active connections.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { count: Arc::new(tx) }
    }

    /// Registers a connection; hold the guard for its lifetime.
    #[must_use]
    pub fn acquire(&self) -> ConnectionGuard {
        self.count.send_modify(|n| *n += 1);
        ConnectionGuard {
            count: Arc::clone(&self.count),
        }
    }

    /// Returns the number of active connections.
    #[must_use]
    pub fn active(&self) -> usize {
        *self.count.borrow()
    }

    /// Waits until every connection guard has been dropped.
    pub async fn drained(&self) {
        let mut rx = self.count.subscribe();
        let _ = rx.wait_for(|n| *n == 0).await;
    }
}

impl Default for ConnectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard representing one active connection.
#[derive(Debug)]
pub struct ConnectionGuard {
    count: Arc<watch::Sender<usize>>,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.count.send_modify(|n| *n = n.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_sets_shutdown() {
        let signal = ShutdownSignal::new();
        assert!(!signal.is_shutdown());

        signal.trigger();
        assert!(signal.is_shutdown());
    }

    #[tokio::test]
    async fn test_trigger_is_idempotent() {
        let signal = ShutdownSignal::new();
        signal.trigger();
        signal.trigger();
        assert!(signal.is_shutdown());
    }

    #[tokio::test]
    async fn test_clones_observe_trigger() {
        let signal = ShutdownSignal::new();
        let clone = signal.clone();

        signal.trigger();
        assert!(clone.is_shutdown());
    }

    #[tokio::test]
    async fn test_recv_completes_after_trigger() {
        let signal = ShutdownSignal::new();
        let waiter = signal.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            signal.trigger();
        });

        tokio::time::timeout(Duration::from_secs(1), waiter.recv())
            .await
            .expect("recv should complete");
    }

    #[tokio::test]
    async fn test_recv_completes_immediately_when_already_triggered() {
        let signal = ShutdownSignal::new();
        signal.trigger();

        tokio::time::timeout(Duration::from_millis(10), signal.recv())
            .await
            .expect("recv should complete immediately");
    }

    #[tokio::test]
    async fn test_tracker_counts_guards() {
        let tracker = ConnectionTracker::new();
        assert_eq!(tracker.active(), 0);

        let a = tracker.acquire();
        let b = tracker.acquire();
        assert_eq!(tracker.active(), 2);

        drop(a);
        assert_eq!(tracker.active(), 1);
        drop(b);
        assert_eq!(tracker.active(), 0);
    }

    #[tokio::test]
    async fn test_drained_completes_when_empty() {
        let tracker = ConnectionTracker::new();

        tokio::time::timeout(Duration::from_millis(10), tracker.drained())
            .await
            .expect("drained should complete immediately");
    }

    #[tokio::test]
    async fn test_drained_waits_for_guards() {
        let tracker = ConnectionTracker::new();
        let guard = tracker.acquire();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            drop(guard);
        });

        tokio::time::timeout(Duration::from_secs(1), tracker.drained())
            .await
            .expect("drained should complete after guard drop");
    }
}
