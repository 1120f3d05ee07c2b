//! Error types and handling for Tempeste
//!
//! This module defines the error types used throughout the application,
//! providing consistent error handling and reporting.

use thiserror::Error;

/// Result type alias for Tempeste operations
pub type Result<T> = std::result::Result<T, TempoError>;

/// Main error type for Tempeste
#[derive(Debug, Error)]
pub enum TempoError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Authentication/token exchange errors
    #[error("Authentication error: {message}")]
    Auth { message: String },

    /// Network-related errors
    #[error("Network error: {message}")]
    Network { message: String },

    /// Remote API errors (endpoint reachable but request failed)
    #[error("API error: {message}")]
    Api { message: String },

    /// Payload parsing errors
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Generic errors with context
    #[error("Error: {message}")]
    Generic { message: String },
}

impl TempoError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        TempoError::Config {
            message: message.into(),
        }
    }

    /// Create a new auth error
    pub fn auth<S: Into<String>>(message: S) -> Self {
        TempoError::Auth {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        TempoError::Network {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        TempoError::Api {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        TempoError::Parse {
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        TempoError::Io {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        TempoError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        TempoError::Generic {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for TempoError {
    fn from(err: std::io::Error) -> Self {
        TempoError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for TempoError {
    fn from(err: serde_yaml::Error) -> Self {
        TempoError::config(err.to_string())
    }
}

impl From<serde_json::Error> for TempoError {
    fn from(err: serde_json::Error) -> Self {
        TempoError::parse(err.to_string())
    }
}

impl From<reqwest::Error> for TempoError {
    fn from(err: reqwest::Error) -> Self {
        TempoError::network(err.to_string())
    }
}

impl From<chrono::ParseError> for TempoError {
    fn from(err: chrono::ParseError) -> Self {
        TempoError::parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = TempoError::config("test config error");
        assert!(matches!(err, TempoError::Config { .. }));

        let err = TempoError::auth("test auth error");
        assert!(matches!(err, TempoError::Auth { .. }));

        let err = TempoError::validation("field", "test validation error");
        assert!(matches!(err, TempoError::Validation { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = TempoError::network("connection refused");
        let error_string = format!("{}", err);
        assert_eq!(error_string, "Network error: connection refused");

        let err = TempoError::validation("api.client_id", "cannot be empty");
        let error_string = format!("{}", err);
        assert_eq!(
            error_string,
            "Validation error: api.client_id - cannot be empty"
        );
    }

    #[test]
    fn test_from_chrono_parse_error() {
        let parse_err = chrono::DateTime::parse_from_rfc3339("not-a-date").unwrap_err();
        let err: TempoError = parse_err.into();
        assert!(matches!(err, TempoError::Parse { .. }));
    }
}
