//! Busy-tolerant file deletion.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::io;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tokio::fs;
use tracing::warn;

use super::error::ReconcilerError;

/// Retry policy for deletions blocked by another process holding the file.
///
/// The retry count is bounded but large: the busy state is expected to be a
/// download client finishing a write, which clears within seconds. When the
/// attempts run out the failure is surfaced instead of retrying forever.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum delete attempts before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed delay between attempts in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    100
}

fn default_delay_ms() -> u64 {
    3000 // 3 seconds
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given attempt count and delay.
    pub fn new(max_attempts: u32, delay_ms: u64) -> Self {
        Self {
            max_attempts,
            delay_ms,
        }
    }

    /// The delay between attempts.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Outcome of a retried operation that never stopped reporting busy, or
/// failed outright.
#[derive(Debug, Error)]
pub enum RetryError {
    /// Every allowed attempt reported the resource busy.
    #[error("Resource still busy after {attempts} attempts")]
    Exhausted {
        attempts: u32,
        #[source]
        source: io::Error,
    },

    /// A non-busy error, returned without further attempts.
    #[error(transparent)]
    Fatal(io::Error),
}

/// Whether the error indicates the file is held open by another process
/// (e.g. a download client still flushing it).
fn is_busy(error: &io::Error) -> bool {
    // EBUSY is 16 on Linux, ETXTBSY 26
    error.kind() == io::ErrorKind::ResourceBusy
        || matches!(error.raw_os_error(), Some(16) | Some(26))
}

/// Runs `operation`, retrying with the policy's fixed delay while it keeps
/// reporting a busy resource. Any other error aborts immediately.
pub async fn retry_while_busy<T, F, Fut>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, RetryError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<T>>,
{
    let mut attempts = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if is_busy(&error) => {
                attempts += 1;
                if attempts >= policy.max_attempts {
                    return Err(RetryError::Exhausted {
                        attempts,
                        source: error,
                    });
                }
                warn!(
                    "Resource busy (attempt {} of {}), retrying in {:?}",
                    attempts,
                    policy.max_attempts,
                    policy.delay()
                );
                tokio::time::sleep(policy.delay()).await;
            }
            Err(error) => return Err(RetryError::Fatal(error)),
        }
    }
}

/// Removes a file, retrying while the filesystem reports it busy.
pub async fn remove_file_with_retry(
    path: &Path,
    policy: RetryPolicy,
) -> Result<(), ReconcilerError> {
    retry_while_busy(policy, || fs::remove_file(path))
        .await
        .map_err(|error| match error {
            RetryError::Exhausted { attempts, source } => ReconcilerError::RetriesExhausted {
                path: path.to_path_buf(),
                attempts,
                source,
            },
            RetryError::Fatal(source) => ReconcilerError::DeleteFailed {
                path: path.to_path_buf(),
                source,
            },
        })
}
