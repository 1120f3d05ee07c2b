//! Configuration management for Tempeste
//!
//! This module handles loading, validation, and management of the application
//! configuration from YAML files.

use crate::error::{Result, TempoError};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_true() -> bool {
    true
}

fn default_poll_interval() -> u64 {
    3600
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RTE API access configuration
    pub api: ApiConfig,

    /// Seconds between poll cycles
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// RTE API access parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// OAuth2 client id issued by the RTE API portal
    pub client_id: String,

    /// OAuth2 client secret issued by the RTE API portal
    pub client_secret: String,

    /// Token endpoint override, mainly for tests
    #[serde(default = "ApiConfig::default_token_url")]
    pub token_url: String,

    /// Tempo days endpoint override, mainly for tests
    #[serde(default = "ApiConfig::default_tempo_url")]
    pub tempo_url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Directory or file path for rotated log files
    pub file: String,

    /// Number of rotated files to keep
    pub backup_count: u32,

    /// Whether to log to console
    #[serde(default = "default_true")]
    pub console_output: bool,

    /// Whether to use JSON format
    #[serde(default)]
    pub json_format: bool,
}

impl ApiConfig {
    fn default_token_url() -> String {
        crate::rte::API_TOKEN_ENDPOINT.to_string()
    }

    fn default_tempo_url() -> String {
        crate::rte::API_TEMPO_ENDPOINT.to_string()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            token_url: Self::default_token_url(),
            tempo_url: Self::default_tempo_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            file: "/tmp/tempeste.log".to_string(),
            backup_count: 5,
            console_output: true,
            json_format: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            poll_interval_secs: default_poll_interval(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        let default_paths = [
            "tempeste_config.yaml",
            "/data/tempeste_config.yaml",
            "/etc/tempeste/config.yaml",
        ];

        for path in &default_paths {
            if Path::new(path).exists() {
                return Self::from_file(path);
            }
        }

        // Fall back to default configuration
        Ok(Config::default())
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.client_id.trim().is_empty() {
            return Err(TempoError::validation(
                "api.client_id",
                "Client id cannot be empty",
            ));
        }

        if self.api.client_secret.trim().is_empty() {
            return Err(TempoError::validation(
                "api.client_secret",
                "Client secret cannot be empty",
            ));
        }

        if self.api.token_url.trim().is_empty() {
            return Err(TempoError::validation(
                "api.token_url",
                "Token endpoint cannot be empty",
            ));
        }

        if self.api.tempo_url.trim().is_empty() {
            return Err(TempoError::validation(
                "api.tempo_url",
                "Tempo endpoint cannot be empty",
            ));
        }

        if self.poll_interval_secs == 0 {
            return Err(TempoError::validation(
                "poll_interval_secs",
                "Must be greater than 0",
            ));
        }

        Ok(())
    }
}
