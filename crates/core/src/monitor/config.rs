//! Configuration for the monitor module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for source folder monitoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Folders the download client drops finished files into.
    pub source_folders: Vec<PathBuf>,

    /// Filename suffix marking a download still in progress.
    #[serde(default = "default_incomplete_suffix")]
    pub incomplete_suffix: String,
}

fn default_incomplete_suffix() -> String {
    "!qB".to_string()
}

impl WatchConfig {
    /// Creates a config for the given source folders with defaults.
    pub fn new(source_folders: Vec<PathBuf>) -> Self {
        Self {
            source_folders,
            incomplete_suffix: default_incomplete_suffix(),
        }
    }

    /// Sets the incomplete-download suffix.
    pub fn with_incomplete_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.incomplete_suffix = suffix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suffix() {
        let config = WatchConfig::new(vec![PathBuf::from("/downloads")]);
        assert_eq!(config.incomplete_suffix, "!qB");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: WatchConfig = toml::from_str(r#"source_folders = ["/downloads"]"#).unwrap();
        assert_eq!(config.source_folders, vec![PathBuf::from("/downloads")]);
        assert_eq!(config.incomplete_suffix, "!qB");
    }
}
