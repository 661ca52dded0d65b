//! Configuration for the converter module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the ffmpeg-based transcoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscoderConfig {
    /// Path to the ffmpeg binary.
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: PathBuf,

    /// Timestamp the transcode starts reading from (skips a leading ad
    /// block in recorded material).
    #[serde(default = "default_seek_start")]
    pub seek_start: String,

    /// Quality/codec arguments passed through to ffmpeg.
    #[serde(default = "default_quality_args")]
    pub quality_args: Vec<String>,

    /// FFmpeg log level (quiet, error, warning, info, verbose, debug).
    #[serde(default = "default_log_level")]
    pub ffmpeg_log_level: String,

    /// Filename substrings that cause the file to be copied verbatim
    /// instead of transcoded.
    #[serde(default)]
    pub skip_patterns: Vec<String>,
}

fn default_ffmpeg_path() -> PathBuf {
    PathBuf::from("ffmpeg")
}

fn default_seek_start() -> String {
    "00:00:32".to_string()
}

fn default_quality_args() -> Vec<String> {
    vec![
        "-c:v".to_string(),
        "hevc_nvenc".to_string(),
        "-profile:v".to_string(),
        "main".to_string(),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
            seek_start: default_seek_start(),
            quality_args: default_quality_args(),
            ffmpeg_log_level: default_log_level(),
            skip_patterns: Vec::new(),
        }
    }
}

impl TranscoderConfig {
    /// Creates a config with a custom ffmpeg path.
    pub fn with_path(ffmpeg_path: PathBuf) -> Self {
        Self {
            ffmpeg_path,
            ..Default::default()
        }
    }

    /// Sets the seek start timestamp.
    pub fn with_seek_start(mut self, seek_start: impl Into<String>) -> Self {
        self.seek_start = seek_start.into();
        self
    }

    /// Sets the quality arguments.
    pub fn with_quality_args(mut self, args: Vec<String>) -> Self {
        self.quality_args = args;
        self
    }

    /// Sets the skip patterns.
    pub fn with_skip_patterns(mut self, patterns: Vec<String>) -> Self {
        self.skip_patterns = patterns;
        self
    }
}
