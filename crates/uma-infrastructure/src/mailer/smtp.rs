//! SMTP mail notifier

use crate::config::MailConfig;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::warn;
use uma_domain::error::{Error, Result};
use uma_domain::ports::MailNotifier;

/// Mail notifier over an SMTP relay
pub struct SmtpNotifier {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpNotifier {
    pub fn new(config: &MailConfig) -> Result<Self> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| Error::config_with_source("invalid mail.from address", e))?;

        let mut builder = SmtpTransport::relay(&config.smtp_host)
            .map_err(|e| Error::config_with_source("failed to create SMTP transport", e))?
            .port(config.smtp_port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl MailNotifier for SmtpNotifier {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<bool> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to
                .parse()
                .map_err(|e| Error::mail_with_source(format!("invalid recipient '{to}'"), e))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| Error::mail_with_source("failed to build mail message", e))?;

        // Network I/O on the blocking pool; lettre's sync transport would
        // otherwise stall the async workers.
        let transport = self.transport.clone();
        let outcome = tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|e| Error::internal_with_source("mail dispatch task failed", e))?;

        match outcome {
            Ok(_) => Ok(true),
            Err(e) => {
                // Reported, not retried.
                warn!(error = %e, "mail dispatch failed");
                Ok(false)
            }
        }
    }
}
