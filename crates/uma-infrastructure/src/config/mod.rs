//! Configuration management
//!
//! Layered configuration via Figment: defaults, then a TOML file, then
//! `UMA__`-prefixed environment variables (double underscore separates
//! nested keys, e.g. `UMA__AUTH__SECRET`).

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AuthConfig, LoggingConfig, MailConfig, ServerConfig};
