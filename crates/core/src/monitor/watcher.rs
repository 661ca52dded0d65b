//! Directory monitor implementation.

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

use crate::queue::QueueHandle;

use super::error::MonitorError;

/// Watches source folders and feeds settled files into the conversion
/// queue.
///
/// Watcher errors and vanished files never propagate past the monitor;
/// the only fatal errors are the ones raised while setting a watch up.
pub struct DirectoryMonitor {
    queue: QueueHandle,
    incomplete_suffix: String,
    shutdown_tx: broadcast::Sender<()>,
}

impl DirectoryMonitor {
    /// Creates a monitor feeding the given queue.
    pub fn new(queue: QueueHandle, incomplete_suffix: impl Into<String>) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            queue,
            incomplete_suffix: incomplete_suffix.into(),
            shutdown_tx,
        }
    }

    /// Starts watching one source folder.
    ///
    /// Lists the folder's current contents first (recovering files that
    /// arrived while the process was down), then subscribes to live change
    /// notifications. Returns once the watch is established; events are
    /// handled on a background task until [`stop`](Self::stop) is called.
    pub async fn watch(&self, folder: &Path) -> Result<(), MonitorError> {
        self.scan_existing(folder).await?;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<notify::Event, notify::Error>| match result {
                Ok(event) => {
                    let _ = event_tx.send(event);
                }
                Err(e) => error!("Watch error: {}", e),
            },
            notify::Config::default(),
        )
        .map_err(|source| MonitorError::WatchFailed {
            path: folder.to_path_buf(),
            source,
        })?;

        watcher
            .watch(folder, RecursiveMode::NonRecursive)
            .map_err(|source| MonitorError::WatchFailed {
                path: folder.to_path_buf(),
                source,
            })?;
        info!("Watching {}", folder.display());

        let queue = self.queue.clone();
        let suffix = self.incomplete_suffix.clone();
        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let folder = folder.to_path_buf();

        tokio::spawn(async move {
            // The watcher must stay alive for as long as events are wanted.
            let _watcher = watcher;
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    event = event_rx.recv() => {
                        let Some(event) = event else { break };
                        if matches!(event.kind, EventKind::Access(_)) {
                            continue;
                        }
                        debug!("Event {:?} detected in {}", event.kind, folder.display());
                        for path in event.paths {
                            Self::admit(&queue, &suffix, path).await;
                        }
                    }
                }
            }
            info!("Stopped watching {}", folder.display());
        });

        Ok(())
    }

    /// Stops all event loops started by [`watch`](Self::watch).
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }

    async fn scan_existing(&self, folder: &Path) -> Result<(), MonitorError> {
        let mut entries = fs::read_dir(folder)
            .await
            .map_err(|source| MonitorError::ScanFailed {
                path: folder.to_path_buf(),
                source,
            })?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| MonitorError::ScanFailed {
                path: folder.to_path_buf(),
                source,
            })?
        {
            Self::admit(&self.queue, &self.incomplete_suffix, entry.path()).await;
        }

        Ok(())
    }

    /// Enqueues a path if it names a settled, still-present file.
    ///
    /// The underlying notification may have been a delete or rename, so
    /// presence is re-checked here; a vanished path is logged and dropped.
    pub(crate) async fn admit(queue: &QueueHandle, incomplete_suffix: &str, path: PathBuf) {
        let Some(name) = path.file_name().map(|name| name.to_string_lossy().into_owned())
        else {
            return;
        };
        if name.ends_with(incomplete_suffix) {
            debug!("Ignoring in-progress download {}", name);
            return;
        }

        match fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => {
                info!("Enqueueing {}...", path.display());
                queue.enqueue(path);
            }
            Ok(_) => {
                debug!("Skipping non-file entry {}", path.display());
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                info!("File {} has been deleted", path.display());
            }
            Err(error) => {
                warn!("Failed to stat {}: {}", path.display(), error);
            }
        }
    }
}
