//! Configuration for the resolver module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::rules::{default_rename_rules, RenameRule};

/// Configuration for the destination library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Root directory of the library.
    pub dest_root: PathBuf,

    /// Token inserted before the file extension of every placed file.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Ordered rename rules applied to incoming filenames.
    #[serde(default = "default_rename_rules")]
    pub rename_rules: Vec<RenameRule>,
}

fn default_marker() -> String {
    "processed".to_string()
}

impl LibraryConfig {
    /// Creates a config for the given library root with default rules.
    pub fn new(dest_root: impl Into<PathBuf>) -> Self {
        Self {
            dest_root: dest_root.into(),
            marker: default_marker(),
            rename_rules: default_rename_rules(),
        }
    }

    /// Sets the marker token.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Replaces the rename rules.
    pub fn with_rename_rules(mut self, rules: Vec<RenameRule>) -> Self {
        self.rename_rules = rules;
        self
    }
}
