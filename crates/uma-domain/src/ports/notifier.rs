//! Mail notifier port

use crate::error::Result;
use async_trait::async_trait;

/// Outbound mail contract.
///
/// Returns whether the dispatch succeeded; a failed dispatch is reported,
/// never retried.
#[async_trait]
pub trait MailNotifier: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<bool>;
}
