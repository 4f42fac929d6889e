//! Authentication routes
//!
//! Login, registration, and the two halves of the password-reset flow.
//! None of these are gated; they are how a client obtains a token in the
//! first place.

use crate::dto::{self, ForgetRequest, LoginRequest, RegisterRequest, ResetRequest};
use crate::error::ApiError;
use crate::state::AppState;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{patch, post, State};
use uma_application::CreateUser;

/// `POST /auth/login` - verify credentials, returning a session token.
#[post("/login", format = "json", data = "<body>")]
pub async fn login(state: &State<AppState>, body: Json<LoginRequest>) -> Result<String, ApiError> {
    dto::check(&*body)?;
    let token = state.auth.login(&body.email, &body.password).await?;
    Ok(token)
}

/// `POST /auth/register` - create an account, returning a session token.
#[post("/register", format = "json", data = "<body>")]
pub async fn register(
    state: &State<AppState>,
    body: Json<RegisterRequest>,
) -> Result<status::Created<String>, ApiError> {
    dto::check(&*body)?;
    dto::check_password_strength(&body.password)?;

    let body = body.into_inner();
    let token = state
        .auth
        .register(CreateUser {
            name: body.name,
            email: body.email,
            permission: body.permission,
            password: body.password,
            email_verified: None,
            image: body.image,
        })
        .await?;
    Ok(status::Created::new("/auth/login").body(token))
}

/// `POST /auth/forget` - mail a reset link; the body reports whether the
/// dispatch succeeded.
#[post("/forget", format = "json", data = "<body>")]
pub async fn forget(
    state: &State<AppState>,
    body: Json<ForgetRequest>,
) -> Result<Json<bool>, ApiError> {
    dto::check(&*body)?;
    let delivered = state.auth.forget(&body.email).await?;
    Ok(Json(delivered))
}

/// `PATCH /auth/reset/<token>` - complete a reset with the emailed token.
#[patch("/reset/<token>", format = "json", data = "<body>")]
pub async fn reset(
    state: &State<AppState>,
    token: &str,
    body: Json<ResetRequest>,
) -> Result<(), ApiError> {
    dto::check_password_strength(&body.password)?;
    state.auth.reset(&body.password, token).await?;
    Ok(())
}
