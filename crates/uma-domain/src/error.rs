//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for UMA
///
/// Service-level operations catch collaborator failures and re-raise them as
/// one of these kinds; callers never see raw store, hashing, or signing
/// errors. Login failures are intentionally undifferentiated so the outward
/// error cannot confirm whether an account exists.
#[derive(Error, Debug)]
pub enum Error {
    /// Login failure - wrong password and unknown email are indistinguishable
    #[error("incorrect email and/or password")]
    InvalidCredentials,

    /// Token failed signature or structural checks
    #[error("invalid token: {message}")]
    TokenInvalid {
        /// Description of the verification failure
        message: String,
    },

    /// Token is past its expiry
    #[error("token has expired")]
    TokenExpired,

    /// Resource not found error
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Uniqueness or state conflict
    #[error("conflict: {message}")]
    Conflict {
        /// Description of the conflict
        message: String,
    },

    /// Request input failed validation
    #[error("validation failed: {message}")]
    Validation {
        /// Description of the validation failure
        message: String,
    },

    /// Authenticated identity lacks a required permission
    #[error("permission denied")]
    Forbidden,

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Mail dispatch error
    #[error("mail error: {message}")]
    Mail {
        /// Description of the mail error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Any unexpected failure, normalized; the message is for logs, the HTTP
    /// layer exposes only a generic body for this kind
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a token-invalid error
    pub fn token_invalid<S: Into<String>>(message: S) -> Self {
        Self::TokenInvalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a mail error with source
    pub fn mail_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Mail {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error with source
    pub fn internal_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Normalize any domain error into the internal kind, preserving the
    /// original as the source. Token errors keep their kind so the transport
    /// layer can reject them uniformly as unauthorized.
    pub fn normalize(self, context: &str) -> Self {
        match self {
            e @ (Self::TokenInvalid { .. } | Self::TokenExpired) => e,
            other => Self::internal_with_source(context.to_string(), other),
        }
    }
}
