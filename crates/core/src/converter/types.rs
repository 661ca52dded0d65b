//! Types for the converter module.

use std::path::PathBuf;

/// A single transcode invocation.
#[derive(Debug, Clone)]
pub struct TranscodeJob {
    /// Path of the file to read.
    pub input_path: PathBuf,
    /// Path the transcoded output is written to.
    pub output_path: PathBuf,
}

/// Result of processing one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The file was re-encoded into the library.
    Transcoded { output_path: PathBuf },
    /// A skip pattern matched and the bytes were copied verbatim.
    Copied { output_path: PathBuf },
    /// The source disappeared before processing began.
    SourceVanished,
}

impl ConversionOutcome {
    /// The library path the file ended up at, if it was placed.
    pub fn output_path(&self) -> Option<&PathBuf> {
        match self {
            Self::Transcoded { output_path } | Self::Copied { output_path } => Some(output_path),
            Self::SourceVanished => None,
        }
    }
}
