//! User account types

use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse permission level carried by every user account.
///
/// Serialized lowercase on the wire and inside token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    Boss,
    Employee,
    Client,
}

impl PermissionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boss => "boss",
            Self::Employee => "employee",
            Self::Client => "client",
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boss" => Ok(Self::Boss),
            "employee" => Ok(Self::Employee),
            "client" => Ok(Self::Client),
            other => Err(Error::validation(format!(
                "unknown permission level '{other}'; expected boss, employee, or client"
            ))),
        }
    }
}

/// A user account record, uniquely keyed by id and email.
///
/// The id is assigned by the repository on creation and immutable afterwards.
/// The email is a case-insensitive unique lookup key. The password hash never
/// leaves the backend; outward representations use a separate view type.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub permission: PermissionLevel,
    pub password_hash: String,
    pub email_verified: Option<DateTime<Utc>>,
    pub image: Option<String>,
}

/// Input for creating a user record. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub permission: PermissionLevel,
    pub password_hash: String,
    pub email_verified: Option<DateTime<Utc>>,
    pub image: Option<String>,
}

/// Full replacement of a user's mutable fields (PUT semantics).
///
/// The password hash is deliberately absent: only the reset flow may touch it.
#[derive(Debug, Clone)]
pub struct UserReplacement {
    pub name: String,
    pub email: String,
    pub permission: PermissionLevel,
    pub image: Option<String>,
}

/// Partial update of a user's mutable fields (PATCH semantics).
///
/// `image` is doubly optional: the outer `None` leaves the field untouched,
/// `Some(None)` clears it, `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub permission: Option<PermissionLevel>,
    pub image: Option<Option<String>>,
}
