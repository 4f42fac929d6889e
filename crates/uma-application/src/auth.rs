//! Authentication service
//!
//! Orchestrates the credential and token flows: login, registration,
//! password-reset request, and password-reset completion. Each operation is
//! a single linear flow with no persisted state; every collaborator failure
//! is caught here and normalized to a typed domain error, so no raw store,
//! hashing, or signing error ever reaches a caller and no error value can
//! flow through the success channel.

use crate::user::{CreateUser, UserService};
use chrono::Duration;
use std::sync::Arc;
use tracing::{info, warn};
use uma_domain::error::{Error, Result};
use uma_domain::ports::{MailNotifier, PasswordHasher, TokenSigner, UserRepository};
use uma_domain::user::User;

/// Authentication and token lifecycle service.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    registry: UserService,
    mailer: Arc<dyn MailNotifier>,
    hasher: Arc<dyn PasswordHasher>,
    signer: Arc<dyn TokenSigner>,
    session_ttl: Duration,
    reset_ttl: Duration,
    reset_base_url: String,
}

impl AuthService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<dyn UserRepository>,
        registry: UserService,
        mailer: Arc<dyn MailNotifier>,
        hasher: Arc<dyn PasswordHasher>,
        signer: Arc<dyn TokenSigner>,
        session_ttl: Duration,
        reset_ttl: Duration,
        reset_base_url: String,
    ) -> Self {
        Self {
            users,
            registry,
            mailer,
            hasher,
            signer,
            session_ttl,
            reset_ttl,
            reset_base_url,
        }
    }

    /// Verify credentials and issue a session token.
    ///
    /// An unknown email and a wrong password fail identically, so the
    /// outward error never confirms whether an account exists.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| Error::internal_with_source("login lookup failed", e))?
            .ok_or(Error::InvalidCredentials)?;

        if !self
            .verify_password(password.to_owned(), user.password_hash.clone())
            .await?
        {
            return Err(Error::InvalidCredentials);
        }

        info!(user_id = %user.id, "login succeeded");
        self.signer.issue(&user, self.session_ttl)
    }

    /// Create a user record and issue a session token for it.
    ///
    /// Record creation (hashing, uniqueness) is delegated to the user
    /// service; conflicts and validation failures propagate typed.
    pub async fn register(&self, data: CreateUser) -> Result<String> {
        let user = self.registry.create(data).await?;
        info!(user_id = %user.id, "user registered");
        self.signer.issue(&user, self.session_ttl)
    }

    /// Issue a short-lived reset token and mail a reset link to the user.
    ///
    /// Returns whether the dispatch succeeded; token issuance failure is an
    /// internal error, an unknown email is a not-found.
    pub async fn forget(&self, email: &str) -> Result<bool> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| Error::internal_with_source("reset-request lookup failed", e))?
            .ok_or_else(|| Error::not_found(format!("user with email '{email}'")))?;

        let token = self.signer.issue(&user, self.reset_ttl)?;
        let link = format!("{}/{}", self.reset_base_url.trim_end_matches('/'), token);

        let delivered = self
            .mailer
            .send(&user.email, "Password recovery", &reset_email_html(&user, &link))
            .await
            .map_err(|e| Error::internal_with_source("reset mail dispatch failed", e))?;

        if !delivered {
            warn!(user_id = %user.id, "password reset mail was not delivered");
        }
        Ok(delivered)
    }

    /// Verify a reset token and store a hash of the newly chosen password.
    pub async fn reset(&self, new_password: &str, token: &str) -> Result<()> {
        let claims = self.signer.verify(token)?;

        let hash = self.registry.hash_password(new_password.to_owned()).await?;
        self.users
            .set_password_hash(&claims.sub, &hash)
            .await
            .map_err(|e| e.normalize("password reset update failed"))?;

        info!(user_id = %claims.sub, "password reset completed");
        Ok(())
    }

    async fn verify_password(&self, password: String, stored_hash: String) -> Result<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| Error::internal_with_source("password verification task failed", e))?
    }
}

/// Body of the password recovery email.
fn reset_email_html(user: &User, link: &str) -> String {
    format!(
        "<p>Password recovery</p>\
         <p>Hello {name},</p>\
         <p>We received a request to reset the password associated with your \
         account. If you did not make this request, please ignore this \
         email.</p>\
         <p>To reset your password, follow the link below:</p>\
         <p><a href=\"{link}\">Reset password</a></p>\
         <p>This link is valid for 15 minutes, after which it expires for \
         security reasons.</p>",
        name = user.name,
        link = link,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uma_domain::user::PermissionLevel;

    #[test]
    fn reset_email_carries_the_link_and_name() {
        let user = User {
            id: "u-1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            permission: PermissionLevel::Client,
            password_hash: String::new(),
            email_verified: None,
            image: None,
        };
        let html = reset_email_html(&user, "http://localhost:3000/reset/abc");
        assert!(html.contains("Hello Ada"));
        assert!(html.contains("http://localhost:3000/reset/abc"));
    }
}
