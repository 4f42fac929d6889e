//! User record management service

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;
use uma_domain::error::{Error, Result};
use uma_domain::ports::{PasswordHasher, UserRepository};
use uma_domain::user::{NewUser, PermissionLevel, User, UserPatch, UserReplacement};

/// Input for creating a user, with the password still in plaintext.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub permission: PermissionLevel,
    pub password: String,
    pub email_verified: Option<DateTime<Utc>>,
    pub image: Option<String>,
}

/// CRUD and listing over the user store.
///
/// Hashes passwords before they reach the repository; the repository itself
/// enforces email uniqueness.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Create a user record from plaintext registration data.
    pub async fn create(&self, data: CreateUser) -> Result<User> {
        let password_hash = self.hash_password(data.password).await?;

        let user = self
            .users
            .create(NewUser {
                name: data.name,
                email: data.email,
                permission: data.permission,
                password_hash,
                email_verified: data.email_verified,
                image: data.image,
            })
            .await?;

        debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// List users, 1-based pagination.
    pub async fn find_all(&self, page: u32, page_size: u32) -> Result<Vec<User>> {
        self.users.list(page, page_size).await
    }

    /// Fetch a single user by id.
    pub async fn find_by_id(&self, id: &str) -> Result<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("user '{id}'")))
    }

    /// List users whose display name matches exactly.
    pub async fn find_by_name(&self, page: u32, page_size: u32, name: &str) -> Result<Vec<User>> {
        self.users.list_by_name(page, page_size, name).await
    }

    /// Replace all mutable fields of a user (PUT semantics).
    pub async fn replace(&self, id: &str, data: UserReplacement) -> Result<User> {
        self.users.replace(id, data).await
    }

    /// Apply a partial update to a user (PATCH semantics).
    pub async fn update(&self, id: &str, patch: UserPatch) -> Result<User> {
        self.users.update(id, patch).await
    }

    /// Delete a user, returning whether a record was removed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        self.users.delete(id).await
    }

    /// Run the password hash on the blocking pool; bcrypt takes tens of
    /// milliseconds and must not stall the async workers.
    pub(crate) async fn hash_password(&self, plaintext: String) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| Error::internal_with_source("password hashing task failed", e))?
    }
}
