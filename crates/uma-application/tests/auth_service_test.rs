//! End-to-end tests for the authentication flows, run against the real
//! bcrypt hasher, JWT signer, and in-memory repository.

use chrono::Duration;
use std::sync::Arc;
use uma_application::{AuthService, CreateUser, UserService};
use uma_domain::error::Error;
use uma_domain::ports::{PasswordHasher, TokenSigner, UserRepository};
use uma_domain::user::PermissionLevel;
use uma_infrastructure::crypto::{BcryptHasher, JwtSigner};
use uma_infrastructure::mailer::NullNotifier;
use uma_infrastructure::repository::InMemoryUserRepository;

const SECRET: &str = "service-test-secret-0123456789abcdef-long";
const RESET_BASE_URL: &str = "http://localhost:3000/reset";

struct Harness {
    auth: AuthService,
    users: Arc<InMemoryUserRepository>,
    mailer: Arc<NullNotifier>,
    signer: Arc<JwtSigner>,
}

fn harness() -> Harness {
    let users = Arc::new(InMemoryUserRepository::new());
    let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher::new());
    let signer = Arc::new(JwtSigner::new(SECRET));
    let mailer = Arc::new(NullNotifier::new());

    let registry = UserService::new(users.clone(), Arc::clone(&hasher));
    let auth = AuthService::new(
        users.clone(),
        registry,
        mailer.clone(),
        hasher,
        signer.clone(),
        Duration::hours(1),
        Duration::minutes(15),
        RESET_BASE_URL.to_string(),
    );

    Harness {
        auth,
        users,
        mailer,
        signer,
    }
}

async fn register(auth: &AuthService, email: &str, password: &str) -> String {
    auth.register(CreateUser {
        name: "Ada".to_string(),
        email: email.to_string(),
        permission: PermissionLevel::Client,
        password: password.to_string(),
        email_verified: None,
        image: None,
    })
    .await
    .unwrap()
}

/// Pull the reset token out of the emailed link.
fn token_from_mail(html_body: &str) -> String {
    let prefix = format!("{RESET_BASE_URL}/");
    let start = html_body.find(&prefix).unwrap() + prefix.len();
    let end = html_body[start..].find('"').unwrap() + start;
    html_body[start..end].to_string()
}

#[tokio::test]
async fn register_issues_a_token_for_the_new_account() {
    let h = harness();
    let token = register(&h.auth, "ada@example.com", "Secr3t!1").await;

    let claims = h.signer.verify(&token).unwrap();
    let stored = h.users.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(claims.sub, stored.id);
    assert_eq!(claims.permission, PermissionLevel::Client);
    // The plaintext never reaches the store.
    assert_ne!(stored.password_hash, "Secr3t!1");
}

#[tokio::test]
async fn register_then_login_round_trips() {
    let h = harness();
    register(&h.auth, "ada@example.com", "Secr3t!1").await;

    let token = h.auth.login("ada@example.com", "Secr3t!1").await.unwrap();
    let claims = h.signer.verify(&token).unwrap();
    let stored = h.users.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(claims.sub, stored.id);
}

#[tokio::test]
async fn register_with_a_taken_email_is_a_conflict() {
    let h = harness();
    register(&h.auth, "ada@example.com", "Secr3t!1").await;

    let err = h
        .auth
        .register(CreateUser {
            name: "Imposter".to_string(),
            email: "ada@example.com".to_string(),
            permission: PermissionLevel::Client,
            password: "Other3t!1".to_string(),
            email_verified: None,
            image: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict { .. }), "got {err:?}");
}

#[tokio::test]
async fn unknown_email_and_wrong_password_fail_identically() {
    let h = harness();
    register(&h.auth, "ada@example.com", "Secr3t!1").await;

    let unknown = h.auth.login("ghost@example.com", "Secr3t!1").await.unwrap_err();
    let wrong = h.auth.login("ada@example.com", "Wr0ng!pw").await.unwrap_err();

    assert!(matches!(unknown, Error::InvalidCredentials));
    assert!(matches!(wrong, Error::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn login_with_a_corrupt_stored_hash_fails_closed() {
    let h = harness();
    register(&h.auth, "ada@example.com", "Secr3t!1").await;
    let stored = h.users.find_by_email("ada@example.com").await.unwrap().unwrap();
    h.users.set_password_hash(&stored.id, "not-a-hash").await.unwrap();

    let err = h.auth.login("ada@example.com", "Secr3t!1").await.unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials));
}

#[tokio::test]
async fn forget_for_an_unknown_email_is_not_found() {
    let h = harness();
    let err = h.auth.forget("ghost@example.com").await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
    assert!(h.mailer.sent().is_empty());
}

#[tokio::test]
async fn forget_mails_a_link_carrying_a_verifiable_token() {
    let h = harness();
    register(&h.auth, "ada@example.com", "Secr3t!1").await;

    assert!(h.auth.forget("ada@example.com").await.unwrap());

    let sent = h.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ada@example.com");
    assert_eq!(sent[0].subject, "Password recovery");

    let token = token_from_mail(&sent[0].html_body);
    let claims = h.signer.verify(&token).unwrap();
    let stored = h.users.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(claims.sub, stored.id);
    assert_eq!(claims.exp - claims.iat, 15 * 60);
}

#[tokio::test]
async fn reset_replaces_the_password() {
    let h = harness();
    register(&h.auth, "ada@example.com", "Secr3t!1").await;
    h.auth.forget("ada@example.com").await.unwrap();
    let token = token_from_mail(&h.mailer.sent()[0].html_body);

    h.auth.reset("N3w!pass", &token).await.unwrap();

    assert!(h.auth.login("ada@example.com", "N3w!pass").await.is_ok());
    let old = h.auth.login("ada@example.com", "Secr3t!1").await.unwrap_err();
    assert!(matches!(old, Error::InvalidCredentials));
}

#[tokio::test]
async fn reset_with_an_expired_token_is_rejected() {
    let h = harness();
    register(&h.auth, "ada@example.com", "Secr3t!1").await;
    let stored = h.users.find_by_email("ada@example.com").await.unwrap().unwrap();
    let expired = h.signer.issue(&stored, Duration::seconds(-5)).unwrap();

    let err = h.auth.reset("N3w!pass", &expired).await.unwrap_err();
    assert!(matches!(err, Error::TokenExpired), "got {err:?}");
    // The old password still works.
    assert!(h.auth.login("ada@example.com", "Secr3t!1").await.is_ok());
}

#[tokio::test]
async fn reset_with_a_garbage_token_is_rejected() {
    let h = harness();
    let err = h.auth.reset("N3w!pass", "definitely.not.a-jwt").await.unwrap_err();
    assert!(matches!(err, Error::TokenInvalid { .. }), "got {err:?}");
}
