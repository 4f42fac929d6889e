//! Configuration types

use serde::{Deserialize, Serialize};

/// Seconds in the 7-day session token lifetime
pub const SESSION_TTL_DEFAULT_SECS: u64 = 7 * 24 * 60 * 60;

/// Seconds in the 15-minute password-reset token lifetime
pub const RESET_TTL_DEFAULT_SECS: u64 = 15 * 60;

/// Minimum accepted signing secret length, in bytes
pub const SECRET_MIN_LEN: usize = 32;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Outbound mail configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token signing secret
    ///
    /// **REQUIRED**. Configure via `UMA__AUTH__SECRET` or `auth.secret` in
    /// the config file; must be at least 32 bytes. The process refuses to
    /// start without it.
    pub secret: String,

    /// Session token lifetime in seconds
    pub session_ttl_secs: u64,

    /// Password-reset token lifetime in seconds
    pub reset_ttl_secs: u64,

    /// Base URL the emailed reset link is built from; the token is appended
    /// as the final path segment
    pub reset_base_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            // Empty by default - validation in loader.rs enforces presence
            secret: String::new(),
            session_ttl_secs: SESSION_TTL_DEFAULT_SECS,
            reset_ttl_secs: RESET_TTL_DEFAULT_SECS,
            reset_base_url: "http://localhost:3000/reset".to_string(),
        }
    }
}

/// Outbound mail (SMTP) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// When disabled, reset mails go to the no-op notifier (useful for
    /// development and tests)
    pub enabled: bool,

    /// SMTP relay hostname
    pub smtp_host: String,

    /// SMTP relay port
    pub smtp_port: u16,

    /// SMTP username, if the relay requires authentication
    #[serde(default)]
    pub username: Option<String>,

    /// SMTP password
    #[serde(default)]
    pub password: Option<String>,

    /// From address for outbound mail
    pub from: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: "localhost".to_string(),
            smtp_port: 587,
            username: None,
            password: None,
            from: "UMA <no-reply@localhost>".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,

    /// Emit JSON-formatted log lines
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}
