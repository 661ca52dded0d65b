//! Error types for the resolver module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving an output target.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// A configured rename rule pattern does not compile.
    #[error("Invalid rename rule pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },

    /// The target directory could not be created.
    #[error("Failed to create target directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
