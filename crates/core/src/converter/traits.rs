//! Trait definitions for the converter module.

use async_trait::async_trait;

use super::error::TranscoderError;
use super::types::TranscodeJob;

/// An external program that re-encodes a media file.
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Returns the name of this transcoder implementation.
    fn name(&self) -> &str;

    /// Runs the transcode and blocks until the subprocess terminates.
    ///
    /// Succeeds only when the process exits with status zero; the output
    /// file is expected at the job's output path afterwards.
    async fn transcode(&self, job: TranscodeJob) -> Result<(), TranscoderError>;

    /// Validates that the transcoder is available and ready.
    async fn validate(&self) -> Result<(), TranscoderError>;
}
