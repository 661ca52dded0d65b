//! Types for the resolver module.

use std::path::PathBuf;

/// Identifier used to match previously placed copies of the same episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeKey {
    /// Season number, when the filename carries an `S##` marker.
    pub season: Option<u32>,
    /// Substring used for stale matching: the `E##` marker when present,
    /// otherwise the whole output filename.
    pub token: String,
}

/// A resolved destination for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Directory the output file lands in; exists once resolution returns.
    pub directory: PathBuf,
    /// Full path of the output file.
    pub path: PathBuf,
}
