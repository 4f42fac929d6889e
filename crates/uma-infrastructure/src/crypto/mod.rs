//! Credential hashing and token signing adapters

pub mod jwt;
pub mod password;

pub use jwt::JwtSigner;
pub use password::BcryptHasher;
