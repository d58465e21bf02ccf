use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Endpoint URL is not empty
/// - Timeout is not 0
/// - User agent is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.endpoint.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "endpoint.url cannot be empty".to_string(),
        ));
    }

    if config.endpoint.timeout_ms == 0 {
        return Err(ConfigError::ValidationError(
            "endpoint.timeout_ms cannot be 0".to_string(),
        ));
    }

    if config.endpoint.user_agent.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "endpoint.user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
