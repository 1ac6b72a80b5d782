//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, LoggingConfig};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter when it is set and
/// valid. An invalid `RUST_LOG` is ignored with a warning once the subscriber
/// is up.
///
/// # Errors
///
/// Returns `ConfigError::LoggingInit` if the configured filter is invalid or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, ignored) = resolve_filter(rust_log.as_deref(), &config.filter)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ConfigError::LoggingInit(e.to_string()))?;
    if let Some(reason) = ignored {
        tracing::warn!(
            rust_log = rust_log.as_deref().unwrap_or_default(),
            %reason,
            "ignoring invalid RUST_LOG, using configured filter"
        );
    }
    tracing::debug!(filter = %config.filter, json = config.json, "tracing initialized");
    Ok(())
}

/// Picks the `RUST_LOG` directives if they parse, else the configured filter.
///
/// The second element carries the parse error when `RUST_LOG` was rejected.
fn resolve_filter(
    rust_log: Option<&str>,
    configured: &str,
) -> Result<(EnvFilter, Option<String>), ConfigError> {
    let ignored = match rust_log.map(EnvFilter::try_new) {
        Some(Ok(filter)) => return Ok((filter, None)),
        Some(Err(e)) => Some(e.to_string()),
        None => None,
    };

    let filter =
        EnvFilter::try_new(configured).map_err(|e| ConfigError::LoggingInit(e.to_string()))?;
    Ok((filter, ignored))
}
