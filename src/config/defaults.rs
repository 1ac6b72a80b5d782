//! Registry defaults applied to commands that leave a facet unset

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Cooldown;

/// Defaults a registry falls back to for commands without their own facet
#[derive(Debug, Clone, Deserialize)]
pub struct CommandDefaults {
    /// Prefix used when a command sets none
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Cooldown in milliseconds used when a command sets none (0 = none)
    #[serde(default)]
    pub cooldown_ms: u64,
}

impl CommandDefaults {
    /// Default cooldown, if one is configured
    pub fn cooldown(&self) -> Option<Cooldown> {
        Cooldown::from_millis(self.cooldown_ms).ok()
    }

    /// Validate command defaults
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prefix.is_empty() {
            return Err(ValidationError::EmptyDefaultPrefix);
        }
        if self.prefix.chars().any(char::is_whitespace) {
            return Err(ValidationError::WhitespaceInDefaultPrefix);
        }
        Ok(())
    }
}

impl Default for CommandDefaults {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            cooldown_ms: 0,
        }
    }
}

fn default_prefix() -> String {
    "!".to_string()
}
