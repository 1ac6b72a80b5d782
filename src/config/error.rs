//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Default prefix cannot be empty")]
    EmptyDefaultPrefix,

    #[error("Default prefix cannot contain whitespace")]
    WhitespaceInDefaultPrefix,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
