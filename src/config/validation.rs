//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;
use crate::utils::errors::{ApexError, Result};
use super::{ApiConfig, LoggingConfig, SessionConfig, Settings, StorageBackend};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend endpoints and timeout
fn validate_api_config(config: &ApiConfig) -> Result<()> {
    for (name, value) in [
        ("public_url", &config.public_url),
        ("admin_url", &config.admin_url),
        ("trainer_url", &config.trainer_url),
        ("member_url", &config.member_url),
    ] {
        validate_base_url(name, value)?;
    }

    if config.timeout_seconds == 0 {
        return Err(ApexError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

fn validate_base_url(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ApexError::Config(format!("api.{} is required", name)));
    }

    let url = Url::parse(value)
        .map_err(|e| ApexError::Config(format!("api.{} is not a valid URL: {}", name, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApexError::Config(format!(
            "api.{} must use http or https, got {}",
            name,
            url.scheme()
        )));
    }

    Ok(())
}

/// Validate session persistence configuration
fn validate_session_config(config: &SessionConfig) -> Result<()> {
    if config.storage == StorageBackend::File && config.directory.as_os_str().is_empty() {
        return Err(ApexError::Config(
            "session.directory is required for file storage".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ApexError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(ApexError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
