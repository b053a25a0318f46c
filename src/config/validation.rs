use crate::config::types::{AnalyzerConfig, Config, HttpConfig};
use crate::ConfigError;

/// Upper bound on the per-request timeout, in seconds
const MAX_TIMEOUT_SECS: f64 = 3600.0;

/// Validates the entire configuration
///
/// Run after CLI overrides are applied, so a bad flag value fails the same
/// way a bad file value does.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_analyzer_config(&config.analyzer)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates batch measurement configuration
fn validate_analyzer_config(config: &AnalyzerConfig) -> Result<(), ConfigError> {
    if config.concurrency < 1 || config.concurrency > 1000 {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and 1000, got {}",
            config.concurrency
        )));
    }

    if !config.timeout_secs.is_finite()
        || config.timeout_secs <= 0.0
        || config.timeout_secs > MAX_TIMEOUT_SECS
    {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be a positive number of at most {} seconds, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    // progress_threshold has no constraint: 0 disables the notifier for
    // any non-empty batch, usize::MAX keeps it always on

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}
