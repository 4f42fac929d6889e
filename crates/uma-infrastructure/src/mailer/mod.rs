//! Mail notifier adapters
//!
//! SMTP dispatch over lettre for deployments, and a capturing no-op
//! notifier for development and tests.

pub mod null;
pub mod smtp;

pub use null::{NullNotifier, SentMail};
pub use smtp::SmtpNotifier;
