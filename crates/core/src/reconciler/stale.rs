//! Stale file reconciler implementation.

use std::path::Path;
use tokio::fs;
use tracing::info;

use super::error::ReconcilerError;
use super::retry::{remove_file_with_retry, RetryPolicy};
use crate::resolver::EpisodeKey;

/// Clears previously placed files for an episode out of a target directory.
///
/// Must run before the new file is written, so the directory ends up with
/// at most one file per episode.
pub struct StaleFileReconciler {
    policy: RetryPolicy,
}

impl StaleFileReconciler {
    /// Creates a reconciler with the given deletion retry policy.
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Creates a reconciler with the default retry policy.
    pub fn with_defaults() -> Self {
        Self::new(RetryPolicy::default())
    }

    /// Deletes every file in `directory` whose name contains the episode
    /// key token. Returns the number of files removed.
    pub async fn reconcile(
        &self,
        directory: &Path,
        key: &EpisodeKey,
    ) -> Result<usize, ReconcilerError> {
        let mut entries = fs::read_dir(directory)
            .await
            .map_err(|source| ReconcilerError::ListFailed {
                path: directory.to_path_buf(),
                source,
            })?;

        let mut removed = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| ReconcilerError::ListFailed {
                path: directory.to_path_buf(),
                source,
            })?
        {
            let name = entry.file_name();
            if !name.to_string_lossy().contains(&key.token) {
                continue;
            }

            let file_type = entry
                .file_type()
                .await
                .map_err(|source| ReconcilerError::ListFailed {
                    path: entry.path(),
                    source,
                })?;
            if !file_type.is_file() {
                continue;
            }

            remove_file_with_retry(&entry.path(), self.policy).await?;
            info!("Removed stale file {}", entry.path().display());
            removed += 1;
        }

        Ok(removed)
    }
}
