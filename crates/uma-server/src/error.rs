//! HTTP error responses
//!
//! Maps the domain error taxonomy onto statuses and a uniform JSON body.
//! Internal kinds are logged with their full cause chain and surface only a
//! fixed safe message.

use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{response, Request, Response};
use serde::Serialize;
use tracing::error;
use uma_domain::error::Error;

/// JSON error body
#[derive(Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable error kind
    pub error: &'static str,
    /// Human-readable message, safe to expose
    pub message: String,
}

/// Responder wrapper for domain errors
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

fn kind(e: &Error) -> &'static str {
    match e {
        Error::InvalidCredentials => "invalid_credentials",
        Error::TokenInvalid { .. } => "token_invalid",
        Error::TokenExpired => "token_expired",
        Error::NotFound { .. } => "not_found",
        Error::Conflict { .. } => "conflict",
        Error::Validation { .. } => "validation",
        Error::Forbidden => "forbidden",
        Error::Config { .. } | Error::Mail { .. } | Error::Internal { .. } => "internal",
    }
}

fn status(e: &Error) -> Status {
    match e {
        Error::InvalidCredentials | Error::TokenInvalid { .. } | Error::TokenExpired => {
            Status::Unauthorized
        }
        Error::Forbidden => Status::Forbidden,
        Error::NotFound { .. } => Status::NotFound,
        Error::Conflict { .. } => Status::Conflict,
        Error::Validation { .. } => Status::UnprocessableEntity,
        Error::Config { .. } | Error::Mail { .. } | Error::Internal { .. } => {
            Status::InternalServerError
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let http_status = status(&self.0);

        let message = if http_status == Status::InternalServerError {
            // Full detail goes to the log, never to the client.
            error!(error = ?self.0, "request failed");
            "internal server error".to_string()
        } else {
            self.0.to_string()
        };

        let body = Json(ErrorBody {
            error: kind(&self.0),
            message,
        })
        .respond_to(request)?;

        Response::build_from(body).status(http_status).ok()
    }
}

#[rocket::catch(401)]
pub fn unauthorized() -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "unauthorized",
        message: "unauthorized".to_string(),
    })
}

#[rocket::catch(403)]
pub fn forbidden() -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "forbidden",
        message: "permission denied".to_string(),
    })
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "not_found",
        message: "resource not found".to_string(),
    })
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "validation",
        message: "request body failed to parse or validate".to_string(),
    })
}

#[rocket::catch(500)]
pub fn internal() -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "internal",
        message: "internal server error".to_string(),
    })
}
