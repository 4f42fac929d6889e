//! Signed token claims

use crate::user::PermissionLevel;
use serde::{Deserialize, Serialize};

/// The claim set embedded and signed inside a bearer token.
///
/// Tokens are value objects: never persisted, trusted only while both the
/// signature and the expiry check out. The same shape serves session tokens
/// (long-lived) and password-reset tokens (short-lived); only the TTL chosen
/// at issuance differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the user the token was issued for
    pub sub: String,
    /// Permission level at issuance time
    pub permission: PermissionLevel,
    /// Profile image reference, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}
