//! Domain layer for UMA
//!
//! Core business types (users, permissions, token claims), the error
//! taxonomy, and the port traits implemented by the infrastructure layer.
//! This crate is pure: no I/O, no framework types.

pub mod claims;
pub mod error;
pub mod ports;
pub mod user;

pub use claims::Claims;
pub use error::{Error, Result};
pub use user::{NewUser, PermissionLevel, User, UserPatch, UserReplacement};
