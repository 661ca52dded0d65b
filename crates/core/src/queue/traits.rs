//! Trait definitions for the queue module.

use async_trait::async_trait;
use std::path::Path;

use crate::converter::{ConversionOutcome, WorkerError};

/// The work applied to each queued file, one at a time.
#[async_trait]
pub trait FileProcessor: Send + Sync {
    /// Processes a single queued path.
    async fn process(&self, path: &Path) -> Result<ConversionOutcome, WorkerError>;
}
