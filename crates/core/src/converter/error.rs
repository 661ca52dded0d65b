//! Error types for the converter module.

use std::path::PathBuf;
use thiserror::Error;

use crate::reconciler::ReconcilerError;
use crate::resolver::ResolverError;

/// Errors that can occur while running the external transcoder.
#[derive(Debug, Error)]
pub enum TranscoderError {
    /// Transcoder binary not found.
    #[error("Transcoder not found at path: {path}")]
    BinaryNotFound { path: PathBuf },

    /// The subprocess terminated with a non-zero exit status.
    #[error("Transcoder exited with status {code:?}")]
    ExitStatus { code: Option<i32> },

    /// I/O error while spawning or talking to the subprocess.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while processing one source file.
///
/// These stay local to the file that caused them: the queue logs the error
/// and moves on to the next item.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// The source path has no usable filename component.
    #[error("Source path has no filename: {path}")]
    InvalidSource { path: PathBuf },

    /// Output target resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolverError),

    /// Stale file removal or source cleanup failed.
    #[error(transparent)]
    Reconcile(#[from] ReconcilerError),

    /// The transcoder subprocess failed.
    #[error(transparent)]
    Transcode(#[from] TranscoderError),

    /// Copying the source bytes to the output path failed.
    #[error("Failed to copy {source_path} to {destination}")]
    CopyFailed {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Checking the source file failed.
    #[error("Failed to stat source file: {path}")]
    StatFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
