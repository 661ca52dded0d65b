//! Enqueueing side of the conversion queue.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Handle for submitting files to the conversion queue.
///
/// Cheaply cloneable; clones share the same queue. Enqueueing is
/// fire-and-forget: the queue is unbounded and gives no backpressure
/// signal, so the pending depth is logged instead.
#[derive(Clone)]
pub struct QueueHandle {
    tx: mpsc::UnboundedSender<PathBuf>,
    depth: Arc<AtomicUsize>,
}

impl QueueHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<PathBuf>, depth: Arc<AtomicUsize>) -> Self {
        Self { tx, depth }
    }

    /// Submits a file path for conversion.
    ///
    /// If the queue has shut down the path is dropped with a warning; the
    /// caller is never failed.
    pub fn enqueue(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.depth.fetch_add(1, Ordering::Relaxed);
        match self.tx.send(path) {
            Ok(()) => {
                debug!("Enqueued file, {} pending", self.pending());
            }
            Err(error) => {
                self.depth.fetch_sub(1, Ordering::Relaxed);
                warn!("Queue is closed, dropping {}", error.0.display());
            }
        }
    }

    /// Number of files waiting to start (excludes the one in flight).
    pub fn pending(&self) -> usize {
        self.depth.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_enqueue_delivers_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = QueueHandle::new(tx, Arc::new(AtomicUsize::new(0)));

        handle.enqueue("/a.mkv");
        handle.enqueue("/b.mkv");

        assert_eq!(rx.recv().await.unwrap(), PathBuf::from("/a.mkv"));
        assert_eq!(rx.recv().await.unwrap(), PathBuf::from("/b.mkv"));
    }

    #[tokio::test]
    async fn test_pending_tracks_depth() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let handle = QueueHandle::new(tx, Arc::new(AtomicUsize::new(0)));

        assert_eq!(handle.pending(), 0);
        handle.enqueue("/a.mkv");
        handle.enqueue("/b.mkv");
        assert_eq!(handle.pending(), 2);
    }

    #[tokio::test]
    async fn test_enqueue_after_shutdown_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = QueueHandle::new(tx, Arc::new(AtomicUsize::new(0)));

        drop(rx);
        handle.enqueue("/a.mkv");
        assert_eq!(handle.pending(), 0);
    }

    #[tokio::test]
    async fn test_cloned_handles_share_queue() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle1 = QueueHandle::new(tx, Arc::new(AtomicUsize::new(0)));
        let handle2 = handle1.clone();

        handle1.enqueue("/a.mkv");
        handle2.enqueue("/b.mkv");

        assert_eq!(rx.recv().await.unwrap(), PathBuf::from("/a.mkv"));
        assert_eq!(rx.recv().await.unwrap(), PathBuf::from("/b.mkv"));
        assert_eq!(handle1.pending(), 2);
    }
}
