//! Request and response bodies
//!
//! Wire-level types with their validation rules; handlers convert these to
//! and from the domain types. The password strength rule mirrors the
//! registration policy: at least six characters with an upper- and
//! lower-case letter, a digit, and a symbol.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uma_domain::error::{Error, Result};
use uma_domain::user::{PermissionLevel, User, UserPatch, UserReplacement};
use validator::Validate;

/// Run derive-based validation, mapping failures into the domain taxonomy.
pub fn check<T: Validate>(body: &T) -> Result<()> {
    body.validate()
        .map_err(|e| Error::validation(e.to_string()))
}

/// Reject weak passwords before they ever reach the hasher.
pub fn check_password_strength(password: &str) -> Result<()> {
    let strong = password.len() >= 6
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_alphanumeric());
    if strong {
        Ok(())
    } else {
        Err(Error::validation(
            "password must be at least 6 characters and contain upper and \
             lower case letters, a digit, and a symbol",
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub permission: PermissionLevel,
    pub password: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ForgetRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceUserRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub permission: PermissionLevel,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<ReplaceUserRequest> for UserReplacement {
    fn from(body: ReplaceUserRequest) -> Self {
        Self {
            name: body.name,
            email: body.email,
            permission: body.permission,
            image: body.image,
        }
    }
}

/// Wrap a present value so a field can distinguish "absent" (outer `None`,
/// via `#[serde(default)]`) from an explicit `null` (`Some(None)`).
fn present<'de, T, D>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub permission: Option<PermissionLevel>,
    /// Omitted leaves the image untouched; `null` clears it.
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(body: UpdateUserRequest) -> Self {
        Self {
            name: body.name,
            email: body.email,
            permission: body.permission,
            image: body.image,
        }
    }
}

/// Outward user representation; never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub permission: PermissionLevel,
    pub email_verified: Option<DateTime<Utc>>,
    pub image: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            permission: user.permission,
            email_verified: user.email_verified,
            image: user.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_strength_accepts_the_reference_password() {
        assert!(check_password_strength("Secr3t!1").is_ok());
    }

    #[test]
    fn password_strength_rejects_weak_inputs() {
        for weak in ["short", "alllowercase1!", "ALLUPPERCASE1!", "NoDigits!", "NoSymbol1a"] {
            assert!(check_password_strength(weak).is_err(), "accepted {weak:?}");
        }
    }

    #[test]
    fn update_request_tells_an_absent_image_from_an_explicit_null() {
        let absent: UpdateUserRequest = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(absent.image, None);

        let cleared: UpdateUserRequest = serde_json::from_str(r#"{"image": null}"#).unwrap();
        assert_eq!(cleared.image, Some(None));

        let set: UpdateUserRequest = serde_json::from_str(r#"{"image": "https://a/b.png"}"#).unwrap();
        assert_eq!(set.image, Some(Some("https://a/b.png".to_string())));
    }

    #[test]
    fn login_request_requires_a_well_formed_email() {
        let bad = LoginRequest {
            email: "not-an-email".into(),
            password: "x".into(),
        };
        assert!(check(&bad).is_err());

        let good = LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
        };
        assert!(check(&good).is_ok());
    }
}
