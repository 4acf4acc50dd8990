//! `tracing` subscriber bootstrap for applications embedding the codec.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Builds the log filter for the configured level directive.
///
/// ## Errors
/// Returns `InvalidConfiguration` if the directive cannot be parsed.
pub fn build_filter(config: &LoggingConfig) -> CoreResult<EnvFilter> {
    EnvFilter::try_new(config.level.as_str()).map_err(|e| {
        CoreError::InvalidConfiguration(format!("invalid log level {:?}: {e}", config.level))
    })
}

/// ## Summary
/// Installs a global `fmt` subscriber filtered at the configured level.
///
/// Calling this after a global subscriber is already installed is a no-op.
///
/// ## Errors
/// Returns `InvalidConfiguration` if the configured level is invalid.
pub fn init_tracing(config: &LoggingConfig) -> CoreResult<()> {
    let filter = build_filter(config)?;

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init();

    if installed.is_err() {
        tracing::debug!("Global subscriber already installed, keeping it");
    } else {
        tracing::info!(level = %config.level, "Logging initialized");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_level() {
        let config = LoggingConfig {
            level: "debug".to_string(),
        };
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn accepts_target_directives() {
        let config = LoggingConfig {
            level: "warn,vcardlib_rfc=trace".to_string(),
        };
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn rejects_garbage_level() {
        let config = LoggingConfig {
            level: "vcardlib_rfc=notalevel".to_string(),
        };
        let err = build_filter(&config).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    }

    #[test_log::test]
    fn init_is_idempotent_when_subscriber_exists() {
        // test_log has already installed a subscriber for this test.
        let config = LoggingConfig::default();
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_ok());
    }
}
