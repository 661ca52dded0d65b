//! Mock transcoder for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::converter::{TranscodeJob, Transcoder, TranscoderError};

/// Mock implementation of the [`Transcoder`] trait.
///
/// Provides controllable behavior for testing:
/// - Records every job for assertions
/// - Writes configurable bytes to the output path, like a real encode
/// - Can be primed to fail the next invocation
#[derive(Debug, Clone)]
pub struct MockTranscoder {
    jobs: Arc<RwLock<Vec<TranscodeJob>>>,
    output_content: Arc<RwLock<Vec<u8>>>,
    next_error: Arc<RwLock<Option<TranscoderError>>>,
}

impl Default for MockTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTranscoder {
    /// Creates a new mock transcoder.
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(Vec::new())),
            output_content: Arc::new(RwLock::new(b"transcoded".to_vec())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns every job that was submitted.
    pub async fn recorded_jobs(&self) -> Vec<TranscodeJob> {
        self.jobs.read().await.clone()
    }

    /// Number of transcodes performed (including failed ones).
    pub async fn job_count(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Sets the bytes written to the output path on success.
    pub async fn set_output_content(&self, content: Vec<u8>) {
        *self.output_content.write().await = content;
    }

    /// Configures the next transcode to fail with the given error.
    pub async fn set_next_error(&self, error: TranscoderError) {
        *self.next_error.write().await = Some(error);
    }
}

#[async_trait]
impl Transcoder for MockTranscoder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn transcode(&self, job: TranscodeJob) -> Result<(), TranscoderError> {
        self.jobs.write().await.push(job.clone());

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        let content = self.output_content.read().await.clone();
        tokio::fs::write(&job.output_path, content).await?;
        Ok(())
    }

    async fn validate(&self) -> Result<(), TranscoderError> {
        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }
        Ok(())
    }
}
