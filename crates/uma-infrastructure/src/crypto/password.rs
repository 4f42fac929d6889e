//! Password hashing service using bcrypt

use uma_domain::error::{Error, Result};
use uma_domain::ports::PasswordHasher;

/// bcrypt work factor. Verification lands in the tens-of-milliseconds range
/// on commodity hardware.
pub const BCRYPT_COST: u32 = 10;

/// Password hashing service using bcrypt
#[derive(Clone, Default)]
pub struct BcryptHasher;

impl BcryptHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        bcrypt::hash(plaintext, BCRYPT_COST)
            .map_err(|e| Error::internal_with_source("password hashing failed", e))
    }

    fn verify(&self, plaintext: &str, stored_hash: &str) -> Result<bool> {
        // A stored hash bcrypt cannot parse counts as a mismatch, not a crash.
        Ok(bcrypt::verify(plaintext, stored_hash).unwrap_or(false))
    }
}
