//! Route tests for the bearer-token guard

mod common;

use chrono::Duration;
use common::{bearer, register, spawn};
use rocket::http::{Header, Status};
use serde_json::Value;
use uma_domain::ports::{TokenSigner, UserRepository};
use uma_server::AppState;

#[rocket::async_test]
async fn a_missing_authorization_header_is_401() {
    let app = spawn().await;
    let response = app.client.get("/user").dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);

    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "unauthorized");
}

#[rocket::async_test]
async fn a_non_bearer_scheme_is_401() {
    let app = spawn().await;
    let response = app
        .client
        .get("/user")
        .header(Header::new("Authorization", "Token abc"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn an_empty_bearer_token_is_401() {
    let app = spawn().await;
    let response = app
        .client
        .get("/user")
        .header(Header::new("Authorization", "Bearer "))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn a_garbage_token_is_401() {
    let app = spawn().await;
    let response = app
        .client
        .get("/user")
        .header(bearer("definitely.not.a-jwt"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn an_expired_token_is_401() {
    let app = spawn().await;
    register(&app.client, "Ada", "ada@example.com", "client", "Secr3t!1").await;

    let state = app.client.rocket().state::<AppState>().unwrap();
    let user = state
        .users
        .find_by_email("ada@example.com")
        .await
        .unwrap()
        .unwrap();
    let expired = state.signer.issue(&user, Duration::seconds(-5)).unwrap();

    let response = app
        .client
        .get("/user")
        .header(bearer(&expired))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn a_token_for_a_deleted_account_is_401() {
    let app = spawn().await;
    let token = register(&app.client, "Ada", "ada@example.com", "client", "Secr3t!1").await;

    let state = app.client.rocket().state::<AppState>().unwrap();
    let user = state
        .users
        .find_by_email("ada@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(state.users.delete(&user.id).await.unwrap());

    let response = app.client.get("/user").header(bearer(&token)).dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn a_valid_token_reaches_the_handler() {
    let app = spawn().await;
    let token = register(&app.client, "Ada", "ada@example.com", "client", "Secr3t!1").await;

    let response = app.client.get("/user").header(bearer(&token)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["email"], "ada@example.com");
    assert!(body[0].get("password_hash").is_none());
}
