//! Infrastructure layer for UMA
//!
//! Concrete adapters for the domain ports (bcrypt hashing, JWT signing, the
//! in-memory user store, SMTP mail) plus the cross-cutting concerns every
//! deployment needs: layered configuration and structured logging.

pub mod config;
pub mod crypto;
pub mod logging;
pub mod mailer;
pub mod repository;
