//! Shared application state
//!
//! Wires the concrete adapters into the use-case services once at startup;
//! everything here is read-only after construction and shared across
//! requests through Rocket's managed state.

use chrono::Duration;
use std::sync::Arc;
use uma_application::{AuthService, UserService};
use uma_domain::error::Result;
use uma_domain::ports::{MailNotifier, PasswordHasher, TokenSigner, UserRepository};
use uma_infrastructure::config::AppConfig;
use uma_infrastructure::crypto::{BcryptHasher, JwtSigner};
use uma_infrastructure::mailer::{NullNotifier, SmtpNotifier};
use uma_infrastructure::repository::InMemoryUserRepository;

/// Per-process service container
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub signer: Arc<dyn TokenSigner>,
    pub auth: AuthService,
    pub user_service: UserService,
}

impl AppState {
    /// Build the full service graph from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mailer: Arc<dyn MailNotifier> = if config.mail.enabled {
            Arc::new(SmtpNotifier::new(&config.mail)?)
        } else {
            Arc::new(NullNotifier::new())
        };
        Self::assemble(
            config,
            Arc::new(InMemoryUserRepository::new()),
            mailer,
        )
    }

    /// Build the service graph over explicit collaborators. Lets tests swap
    /// the repository or notifier while keeping the production wiring.
    pub fn assemble(
        config: &AppConfig,
        users: Arc<dyn UserRepository>,
        mailer: Arc<dyn MailNotifier>,
    ) -> Result<Self> {
        let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher::new());
        let signer: Arc<dyn TokenSigner> = Arc::new(JwtSigner::new(&config.auth.secret));

        let user_service = UserService::new(Arc::clone(&users), Arc::clone(&hasher));
        let auth = AuthService::new(
            Arc::clone(&users),
            user_service.clone(),
            mailer,
            hasher,
            Arc::clone(&signer),
            Duration::seconds(config.auth.session_ttl_secs as i64),
            Duration::seconds(config.auth.reset_ttl_secs as i64),
            config.auth.reset_base_url.clone(),
        );

        Ok(Self {
            users,
            signer,
            auth,
            user_service,
        })
    }
}
