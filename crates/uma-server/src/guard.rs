//! Request authentication guard
//!
//! Runs before any gated handler body: extracts the bearer token, verifies
//! it, and resolves the referenced user. Every failure resolves to a plain
//! 401 - the cause is logged here and nothing about the verifier leaks to
//! the client. Stateless per request; nothing is shared between concurrent
//! evaluations.

use crate::state::AppState;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use tracing::{error, warn};
use uma_domain::claims::Claims;
use uma_domain::user::User;

/// Verified claims plus the resolved user, attached per request.
///
/// Add this guard to route handlers that require authentication:
///
/// ```rust,ignore
/// #[get("/<id>")]
/// async fn find(auth: AuthenticatedUser, id: &str) -> ... {
/// ```
pub struct AuthenticatedUser {
    pub claims: Claims,
    pub user: User,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(state) = request.rocket().state::<AppState>() else {
            error!("application state is not managed; cannot authenticate");
            return Outcome::Error((Status::InternalServerError, ()));
        };

        // Fail closed before touching the verifier.
        let Some(authorization) = request.headers().get_one("Authorization") else {
            warn!("authorization header is missing");
            return Outcome::Error((Status::Unauthorized, ()));
        };
        let token = match authorization.split_once(' ') {
            Some(("Bearer", token)) if !token.is_empty() => token,
            _ => {
                warn!("bearer token is missing from the authorization header");
                return Outcome::Error((Status::Unauthorized, ()));
            }
        };

        let claims = match state.signer.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                warn!(error = %e, "token verification failed");
                return Outcome::Error((Status::Unauthorized, ()));
            }
        };

        // The account may have been deleted after the token was issued.
        let user = match state.users.find_by_id(&claims.sub).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!(user_id = %claims.sub, "token subject no longer exists");
                return Outcome::Error((Status::Unauthorized, ()));
            }
            Err(e) => {
                error!(error = %e, "user lookup failed during authentication");
                return Outcome::Error((Status::Unauthorized, ()));
            }
        };

        Outcome::Success(AuthenticatedUser { claims, user })
    }
}
