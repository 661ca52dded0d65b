//! Removal of superseded library files.
//!
//! When a new copy of an episode arrives, any previously placed file for
//! the same episode must be cleared out of the target directory before the
//! new file is written. Deletions contend with download clients that may
//! still hold a file open, so they go through a busy-tolerant retry policy.

mod error;
mod retry;
mod stale;

pub use error::ReconcilerError;
pub use stale::StaleFileReconciler;
pub use retry::{remove_file_with_retry, retry_while_busy, RetryError, RetryPolicy};
