//! Per-file conversion worker.

use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use crate::queue::FileProcessor;
use crate::reconciler::{remove_file_with_retry, RetryPolicy, StaleFileReconciler};
use crate::resolver::PathResolver;

use super::error::WorkerError;
use super::traits::Transcoder;
use super::types::{ConversionOutcome, TranscodeJob};

/// Drives one source file through the conversion sequence: resolve the
/// output target, clear stale copies of the episode, transcode or copy,
/// then delete the source.
///
/// The source file is only ever deleted after the output write completed;
/// any failure leaves it in place for the next attempt.
pub struct ConversionWorker<T> {
    resolver: PathResolver,
    reconciler: StaleFileReconciler,
    transcoder: T,
    skip_patterns: Vec<String>,
    retry: RetryPolicy,
}

impl<T: Transcoder> ConversionWorker<T> {
    /// Creates a new worker.
    pub fn new(
        resolver: PathResolver,
        reconciler: StaleFileReconciler,
        transcoder: T,
        skip_patterns: Vec<String>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            resolver,
            reconciler,
            transcoder,
            skip_patterns,
            retry,
        }
    }

    fn should_skip(&self, filename: &str) -> bool {
        self.skip_patterns
            .iter()
            .any(|pattern| filename.contains(pattern))
    }

    /// Processes a single source file.
    pub async fn process(&self, source: &Path) -> Result<ConversionOutcome, WorkerError> {
        match fs::metadata(source).await {
            Ok(_) => {}
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                info!("File {} has been deleted, skipping", source.display());
                return Ok(ConversionOutcome::SourceVanished);
            }
            Err(error) => {
                return Err(WorkerError::StatFailed {
                    path: source.to_path_buf(),
                    source: error,
                });
            }
        }

        let filename = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| WorkerError::InvalidSource {
                path: source.to_path_buf(),
            })?;

        let (target, key) = self.resolver.resolve(&filename).await?;
        self.reconciler.reconcile(&target.directory, &key).await?;

        let outcome = if self.should_skip(&filename) {
            info!("Skip pattern matched for {}, copying verbatim", filename);
            fs::copy(source, &target.path)
                .await
                .map_err(|error| WorkerError::CopyFailed {
                    source_path: source.to_path_buf(),
                    destination: target.path.clone(),
                    source: error,
                })?;
            info!("Copied file: {}", target.path.display());
            ConversionOutcome::Copied {
                output_path: target.path.clone(),
            }
        } else {
            info!("Converting: {}", filename);
            self.transcoder
                .transcode(TranscodeJob {
                    input_path: source.to_path_buf(),
                    output_path: target.path.clone(),
                })
                .await?;
            ConversionOutcome::Transcoded {
                output_path: target.path.clone(),
            }
        };

        remove_file_with_retry(source, self.retry).await?;
        debug!("Removed source {}", source.display());

        Ok(outcome)
    }
}

#[async_trait::async_trait]
impl<T: Transcoder> FileProcessor for ConversionWorker<T> {
    async fn process(&self, path: &Path) -> Result<ConversionOutcome, WorkerError> {
        ConversionWorker::process(self, path).await
    }
}
