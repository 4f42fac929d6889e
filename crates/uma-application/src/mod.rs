//! Application layer for UMA
//!
//! Use-case services orchestrating the domain ports: `AuthService` for the
//! credential and token flows, `UserService` for user record management.
//! Everything here is transport-agnostic; the server crate maps these
//! operations onto HTTP.

pub mod auth;
pub mod user;

pub use auth::AuthService;
pub use user::{CreateUser, UserService};
