use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - At least one source folder is configured
/// - The library destination root is non-empty
/// - The retry policy allows at least one attempt
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.watch.source_folders.is_empty() {
        return Err(ConfigError::ValidationError(
            "watch.source_folders cannot be empty".to_string(),
        ));
    }

    if config.library.dest_root.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "library.dest_root cannot be empty".to_string(),
        ));
    }

    if config.retry.max_attempts == 0 {
        return Err(ConfigError::ValidationError(
            "retry.max_attempts must be at least 1".to_string(),
        ));
    }

    Ok(())
}
