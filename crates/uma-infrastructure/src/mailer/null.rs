//! No-op mail notifier
//!
//! Records every message instead of dispatching it. Used when mail is
//! disabled in configuration and by tests that assert on the reset email.

use async_trait::async_trait;
use std::sync::Mutex;
use uma_domain::error::Result;
use uma_domain::ports::MailNotifier;

/// A message the null notifier captured
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Capturing no-op implementation of the mail port
#[derive(Default)]
pub struct NullNotifier {
    sent: Mutex<Vec<SentMail>>,
}

impl NullNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages captured so far, oldest first
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl MailNotifier for NullNotifier {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<bool> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });
        Ok(true)
    }
}
