//! Credential and token crypto ports
//!
//! Both operations are CPU-bound and synchronous from the caller's
//! perspective; async services run them on the blocking pool.

use crate::claims::Claims;
use crate::error::Result;
use crate::user::User;
use chrono::Duration;

/// One-way password transform with a fixed work factor
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password.
    fn hash(&self, plaintext: &str) -> Result<String>;

    /// Verify a plaintext password against a stored hash.
    ///
    /// A malformed stored hash is a verification failure (`Ok(false)`),
    /// never an error.
    fn verify(&self, plaintext: &str, stored_hash: &str) -> Result<bool>;
}

/// Signed, time-limited token issuance and verification
pub trait TokenSigner: Send + Sync {
    /// Sign a token for the given user, embedding issued-at and the expiry
    /// computed from `ttl`.
    fn issue(&self, user: &User, ttl: Duration) -> Result<String>;

    /// Check signature integrity and expiry, returning the embedded claims.
    ///
    /// Fails with `TokenExpired` past expiry and `TokenInvalid` for any
    /// other defect; callers reject uniformly either way.
    fn verify(&self, token: &str) -> Result<Claims>;
}
