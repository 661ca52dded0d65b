//! Error types for the reconciler module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while clearing stale files.
#[derive(Debug, Error)]
pub enum ReconcilerError {
    /// The target directory could not be listed.
    #[error("Failed to list directory: {path}")]
    ListFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be deleted for a reason other than being busy.
    #[error("Failed to delete file: {path}")]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file stayed busy through every allowed delete attempt.
    #[error("Gave up deleting {path} after {attempts} attempts, file still busy")]
    RetriesExhausted {
        path: PathBuf,
        attempts: u32,
        #[source]
        source: std::io::Error,
    },
}
