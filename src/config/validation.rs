//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{DomovoyError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(DomovoyError::Config("API base URL is required".to_string()));
    }

    let url = Url::parse(&config.base_url)
        .map_err(|e| DomovoyError::Config(format!("Invalid API base URL: {e}")))?;

    match url.scheme() {
        "https" => {}
        // Plain HTTP is only acceptable against a local development backend.
        // There is no downgrade path for remote hosts.
        "http" => {
            let host = url.host_str().unwrap_or_default();
            if host != "localhost" && host != "127.0.0.1" && host != "::1" {
                return Err(DomovoyError::Config(format!(
                    "Plain-http base URL is only allowed for loopback hosts, got {host}"
                )));
            }
        }
        other => {
            return Err(DomovoyError::Config(format!(
                "Unsupported URL scheme: {other}"
            )));
        }
    }

    if config.timeout_seconds == 0 {
        return Err(DomovoyError::Config(
            "Request timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate local store configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.path.is_empty() {
        return Err(DomovoyError::Config(
            "Local store path is required".to_string(),
        ));
    }
    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(DomovoyError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(DomovoyError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
