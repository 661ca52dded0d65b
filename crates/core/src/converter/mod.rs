//! Conversion of source files into the library.
//!
//! This module provides the `Transcoder` trait with its ffmpeg-backed
//! implementation, and the `ConversionWorker` that drives one file through
//! the full resolve, reconcile, transcode-or-copy, cleanup sequence.
//!
//! # Example
//!
//! ```ignore
//! use telecine_core::converter::{ConversionWorker, FfmpegTranscoder, TranscoderConfig};
//!
//! let transcoder = FfmpegTranscoder::new(TranscoderConfig::default());
//! transcoder.validate().await?;
//!
//! let worker = ConversionWorker::new(resolver, reconciler, transcoder, skip_patterns, retry);
//! let outcome = worker.process(Path::new("/downloads/Show.S01E01.mkv")).await?;
//! ```

mod config;
mod error;
mod ffmpeg;
mod traits;
mod types;
mod worker;

pub use config::TranscoderConfig;
pub use error::{TranscoderError, WorkerError};
pub use ffmpeg::FfmpegTranscoder;
pub use traits::Transcoder;
pub use types::{ConversionOutcome, TranscodeJob};
pub use worker::ConversionWorker;
