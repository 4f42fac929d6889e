//! User store port
//!
//! The repository exclusively owns user persistence; services only read and
//! request mutations through this contract. Each operation is assumed atomic
//! per user; failures surface as domain errors that the services wrap.

use crate::error::Result;
use crate::user::{NewUser, User, UserPatch, UserReplacement};
use async_trait::async_trait;

/// User record store contract
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user record, assigning its id.
    ///
    /// Fails with a conflict when the email (case-insensitive) is taken.
    async fn create(&self, user: NewUser) -> Result<User>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Look up a user by email, case-insensitively.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// List users in creation order. `page` is 1-based.
    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<User>>;

    /// List users with an exact display-name match, paginated like `list`.
    async fn list_by_name(&self, page: u32, page_size: u32, name: &str) -> Result<Vec<User>>;

    /// Replace every mutable field of a user.
    async fn replace(&self, id: &str, data: UserReplacement) -> Result<User>;

    /// Apply a partial update to a user.
    async fn update(&self, id: &str, patch: UserPatch) -> Result<User>;

    /// Overwrite the stored password hash for a user.
    async fn set_password_hash(&self, id: &str, hash: &str) -> Result<()>;

    /// Delete a user. Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}
