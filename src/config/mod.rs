//! Commander configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DCOMMANDER` prefix and nested values use double underscores as separators.
//!
//! The defaults here belong to whoever registers commands: a [`Command`] that
//! leaves its prefix or cooldown unset falls back to them through
//! [`CommanderConfig::prefix_for`] and [`CommanderConfig::cooldown_for`].
//!
//! # Example
//!
//! ```no_run
//! use dcommander::config::CommanderConfig;
//!
//! let config = CommanderConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default prefix is {}", config.defaults.prefix);
//! ```

mod defaults;
mod error;
mod logging;

pub use defaults::CommandDefaults;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

use crate::domain::command::Command;
use crate::domain::foundation::Cooldown;

/// Root commander configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommanderConfig {
    /// Registry defaults for commands (prefix, cooldown)
    #[serde(default)]
    pub defaults: CommandDefaults,

    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CommanderConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DCOMMANDER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DCOMMANDER__DEFAULTS__PREFIX=?` -> `defaults.prefix = "?"`
    /// - `DCOMMANDER__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DCOMMANDER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.defaults.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Prefix a command answers to: its own, else the default
    pub fn prefix_for<'a>(&'a self, command: &'a Command) -> &'a str {
        command.prefix().unwrap_or(&self.defaults.prefix)
    }

    /// Cooldown applied to a command: its own, else the default
    pub fn cooldown_for(&self, command: &Command) -> Option<Cooldown> {
        command.cooldown().or_else(|| self.defaults.cooldown())
    }
}
