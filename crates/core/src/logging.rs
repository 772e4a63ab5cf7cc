//! Tracing subscriber setup for native binaries
//!
//! `RUST_LOG` takes precedence over the configured level.

use crate::error::{CoreError, CoreResult};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "bookshelf=debug")
    pub log_level: String,
    /// Include the event target in each line
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            with_target: false,
        }
    }
}

/// Build the filter for `config`, preferring `RUST_LOG` when it is set
pub fn env_filter(config: &LoggingConfig) -> CoreResult<EnvFilter> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    env_filter_from(rust_log.as_deref(), config)
}

/// Build the filter from an explicit `RUST_LOG` value. An unset, empty or
/// unparsable value falls back to `config.log_level`.
pub fn env_filter_from(rust_log: Option<&str>, config: &LoggingConfig) -> CoreResult<EnvFilter> {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .map_or_else(
            || {
                EnvFilter::try_new(&config.log_level).map_err(|e| {
                    CoreError::invalid_config(format!("log level '{}': {e}", config.log_level))
                })
            },
            Ok,
        )
}

/// Install a stderr fmt subscriber
pub fn init_logging(config: &LoggingConfig) -> CoreResult<()> {
    let env_filter = env_filter(config)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.with_target);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| CoreError::internal_error(format!("tracing already initialised: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    fn config(level: &str) -> LoggingConfig {
        LoggingConfig {
            log_level: level.to_string(),
            with_target: false,
        }
    }

    #[test]
    fn rust_log_takes_precedence() {
        let filter = env_filter_from(Some("trace"), &config("warn")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn configured_level_applies_without_rust_log() {
        let filter = env_filter_from(None, &config("debug")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = env_filter_from(Some("  "), &config("error")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn invalid_configured_level_is_rejected() {
        let result = env_filter_from(None, &config("bookshelf=loud"));
        assert!(matches!(result, Err(CoreError::InvalidConfig { .. })));
    }
}
