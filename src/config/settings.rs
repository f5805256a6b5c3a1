//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub features: FeaturesConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Absolute base URL of the УК backend, e.g. "https://uk.example.com/api"
    pub base_url: String,
    /// Overall per-request timeout
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Local store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the on-disk JSON document holding session and offline data
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    /// Serve a fixed set of operations from the local store when the backend
    /// is unreachable. This is a product feature, not a debugging aid.
    pub offline_fallback: bool,
    pub support_chat: bool,
    pub admin_panel: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("DOMOVOY").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::DomovoyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000/api".to_string(),
                timeout_seconds: 15,
                user_agent: "Domovoy-Client/1.0".to_string(),
            },
            storage: StorageConfig {
                path: "domovoy-store.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "./logs".to_string(),
            },
            features: FeaturesConfig {
                offline_fallback: true,
                support_chat: true,
                admin_panel: true,
            },
        }
    }
}
