//! Consuming side of the conversion queue.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::converter::ConversionOutcome;

use super::handle::QueueHandle;
use super::traits::FileProcessor;

/// Background task that drains the queue, one file at a time.
///
/// Runs until every [`QueueHandle`] has been dropped and the channel is
/// empty, so dropping the handles and awaiting the spawned task gives a
/// graceful drain on shutdown.
pub struct QueueRunner<W> {
    rx: mpsc::UnboundedReceiver<PathBuf>,
    depth: Arc<AtomicUsize>,
    worker: W,
}

impl<W: FileProcessor> QueueRunner<W> {
    /// Runs the queue loop, consuming items until the channel is closed.
    ///
    /// This should be spawned as a background task. Item failures are
    /// logged and never abort the loop.
    pub async fn run(mut self) {
        info!("Conversion queue started");

        while let Some(path) = self.rx.recv().await {
            self.depth.fetch_sub(1, Ordering::Relaxed);

            match self.worker.process(&path).await {
                Ok(ConversionOutcome::Transcoded { output_path }) => {
                    info!(
                        "{} converted to {}",
                        path.display(),
                        output_path.display()
                    );
                }
                Ok(ConversionOutcome::Copied { output_path }) => {
                    info!("{} copied to {}", path.display(), output_path.display());
                }
                Ok(ConversionOutcome::SourceVanished) => {}
                Err(e) => {
                    error!("Failed to process {}: {}", path.display(), e);
                }
            }
        }

        info!("Conversion queue stopped");
    }
}

/// Creates a conversion queue.
///
/// Returns:
/// - [`QueueHandle`] - for enqueueing files (clone to share across tasks)
/// - [`QueueRunner`] - spawn as a background task with
///   `tokio::spawn(runner.run())`
pub fn create_queue<W: FileProcessor>(worker: W) -> (QueueHandle, QueueRunner<W>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let depth = Arc::new(AtomicUsize::new(0));
    let handle = QueueHandle::new(tx, Arc::clone(&depth));
    let runner = QueueRunner { rx, depth, worker };
    (handle, runner)
}
