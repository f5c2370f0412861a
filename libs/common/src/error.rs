//! Custom error types for the common library
//!
//! This module defines application-specific error types that can be used
//! throughout the application.

use thiserror::Error;

/// Custom error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error occurred while reading or deserializing configuration sources
    #[error("Configuration load error: {0}")]
    Load(#[from] config::ConfigError),

    /// A required value was absent or empty
    #[error("Missing configuration value: {0}")]
    Missing(String),

    /// A value was present but unusable
    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Type alias for Result with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
