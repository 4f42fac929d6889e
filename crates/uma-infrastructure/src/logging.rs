//! Structured logging with tracing
//!
//! Configures the tracing-subscriber registry from `LoggingConfig`; the
//! `UMA_LOG` environment variable overrides the configured level filter.

use crate::config::LoggingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};
use uma_domain::error::{Error, Result};

/// Initialize logging with the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_env("UMA_LOG").or_else(|_| {
        EnvFilter::try_new(&config.level).map_err(|e| {
            Error::config_with_source(format!("invalid log level '{}'", config.level), e)
        })
    })?;

    // json and plain layers have different types, hence the two branches
    if config.json_format {
        Registry::default()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        Registry::default()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }

    tracing::info!(level = %config.level, "logging initialized");
    Ok(())
}
