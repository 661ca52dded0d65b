//! Error types for the monitor module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while setting up folder monitoring.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The initial scan of a source folder failed.
    #[error("Failed to scan source folder: {path}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Subscribing to change notifications for a folder failed.
    #[error("Failed to watch source folder: {path}")]
    WatchFailed {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}
