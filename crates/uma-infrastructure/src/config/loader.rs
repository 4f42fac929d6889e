//! Configuration loader
//!
//! Merges defaults, a TOML file, and prefixed environment variables with
//! Figment, then validates the result before the server starts.

use crate::config::types::{AppConfig, SECRET_MIN_LEN};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uma_domain::error::{Error, Result};

/// Default config file looked up when no path is given
const DEFAULT_CONFIG_FILE: &str = "uma.toml";

/// Environment variable prefix; nested keys use a double underscore
/// (`UMA__AUTH__SECRET` -> `auth.secret`)
const CONFIG_ENV_PREFIX: &str = "UMA__";

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or `uma.toml` if present)
    /// 3. Environment variables with the `UMA__` prefix
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let path = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if path.exists() {
            figment = figment.merge(Toml::file(&path));
            info!("configuration loaded from {}", path.display());
        } else if self.config_path.is_some() {
            warn!("configuration file not found: {}", path.display());
        }

        figment = figment.merge(Env::prefixed(CONFIG_ENV_PREFIX).split("__"));

        let config: AppConfig = figment
            .extract()
            .map_err(|e| Error::config_with_source("failed to extract configuration", e))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Reject configurations the server must not start with.
    fn validate(config: &AppConfig) -> Result<()> {
        if config.auth.secret.is_empty() {
            return Err(Error::config(
                "auth.secret is required; set UMA__AUTH__SECRET or auth.secret in the config file",
            ));
        }
        if config.auth.secret.len() < SECRET_MIN_LEN {
            return Err(Error::config(format!(
                "auth.secret must be at least {SECRET_MIN_LEN} bytes"
            )));
        }
        if config.auth.reset_base_url.is_empty() {
            return Err(Error::config("auth.reset_base_url must not be empty"));
        }
        if config.mail.enabled && config.mail.smtp_host.is_empty() {
            return Err(Error::config("mail.smtp_host is required when mail is enabled"));
        }
        Ok(())
    }
}
