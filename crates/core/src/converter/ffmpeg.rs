//! FFmpeg-based transcoder implementation.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use super::config::TranscoderConfig;
use super::error::TranscoderError;
use super::traits::Transcoder;
use super::types::TranscodeJob;

/// FFmpeg-based transcoder implementation.
pub struct FfmpegTranscoder {
    config: TranscoderConfig,
}

impl FfmpegTranscoder {
    /// Creates a new ffmpeg transcoder with the given configuration.
    pub fn new(config: TranscoderConfig) -> Self {
        Self { config }
    }

    /// Creates a transcoder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(TranscoderConfig::default())
    }

    /// Builds the fixed ffmpeg argument list for a job: seek offset, input
    /// path, quality arguments, log level, overwrite flag, output path.
    fn build_args(&self, job: &TranscodeJob) -> Vec<String> {
        let mut args = vec![
            "-ss".to_string(),
            self.config.seek_start.clone(),
            "-i".to_string(),
            job.input_path.to_string_lossy().to_string(),
        ];

        args.extend(self.config.quality_args.iter().cloned());

        args.extend([
            "-loglevel".to_string(),
            self.config.ffmpeg_log_level.clone(),
            "-y".to_string(),
            job.output_path.to_string_lossy().to_string(),
        ]);

        args
    }

    fn map_spawn_error(&self, error: std::io::Error) -> TranscoderError {
        if error.kind() == std::io::ErrorKind::NotFound {
            TranscoderError::BinaryNotFound {
                path: self.config.ffmpeg_path.clone(),
            }
        } else {
            TranscoderError::Io(error)
        }
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    async fn transcode(&self, job: TranscodeJob) -> Result<(), TranscoderError> {
        let start = Instant::now();
        let args = self.build_args(&job);

        let mut child = Command::new(&self.config.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.map_spawn_error(e))?;

        // Stream both console streams into the log; ffmpeg writes its
        // progress to stderr.
        let stdout = child.stdout.take().expect("stdout should be captured");
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                debug!("ffmpeg: {}", line);
            }
        });

        let stderr = child.stderr.take().expect("stderr should be captured");
        let mut lines = BufReader::new(stderr).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            debug!("ffmpeg: {}", line);
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(TranscoderError::ExitStatus {
                code: status.code(),
            });
        }

        info!(
            "Transcoded {} in {} ms",
            job.input_path.display(),
            start.elapsed().as_millis()
        );
        Ok(())
    }

    async fn validate(&self) -> Result<(), TranscoderError> {
        let output = Command::new(&self.config.ffmpeg_path)
            .arg("-version")
            .output()
            .await
            .map_err(|e| self.map_spawn_error(e))?;

        if !output.status.success() {
            return Err(TranscoderError::ExitStatus {
                code: output.status.code(),
            });
        }

        Ok(())
    }
}
