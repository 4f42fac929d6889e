//! Shared harness for the route tests: a local Rocket client wired over the
//! in-memory repository and the capturing mail notifier.

use rocket::http::{Header, Status};
use rocket::local::asynchronous::Client;
use std::sync::Arc;
use uma_infrastructure::config::AppConfig;
use uma_infrastructure::mailer::NullNotifier;
use uma_infrastructure::repository::InMemoryUserRepository;
use uma_server::{build_rocket, AppState};

pub const SECRET: &str = "route-test-secret-0123456789abcdef-long";

pub struct TestApp {
    pub client: Client,
    pub mailer: Arc<NullNotifier>,
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.secret = SECRET.to_string();
    config.auth.session_ttl_secs = 3600;
    config
}

pub async fn spawn() -> TestApp {
    let mailer = Arc::new(NullNotifier::new());
    let state = AppState::assemble(
        &test_config(),
        Arc::new(InMemoryUserRepository::new()),
        mailer.clone(),
    )
    .expect("test state wiring");
    let client = Client::tracked(build_rocket(state))
        .await
        .expect("valid rocket instance");
    TestApp { client, mailer }
}

/// Register an account and return its session token.
#[allow(dead_code)]
pub async fn register(
    client: &Client,
    name: &str,
    email: &str,
    permission: &str,
    password: &str,
) -> String {
    let response = client
        .post("/auth/register")
        .json(&serde_json::json!({
            "name": name,
            "email": email,
            "permission": permission,
            "password": password,
        }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);
    response.into_string().await.expect("token body")
}

#[allow(dead_code)]
pub fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {token}"))
}
