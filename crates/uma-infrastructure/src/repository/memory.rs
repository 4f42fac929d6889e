//! In-memory user repository
//!
//! Concurrent map adapter for the `UserRepository` port. Ids are UUID v4,
//! the email index is case-insensitive and unique, and listing follows
//! creation order so pagination is deterministic.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use uma_domain::error::{Error, Result};
use uma_domain::ports::UserRepository;
use uma_domain::user::{NewUser, User, UserPatch, UserReplacement};
use uuid::Uuid;

struct Record {
    user: User,
    seq: u64,
}

/// DashMap-backed user store
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: DashMap<String, Record>,
    /// Lowercased email -> user id
    emails: DashMap<String, String>,
    seq: AtomicU64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn page(&self, page: u32, page_size: u32, name: Option<&str>) -> Vec<User> {
        let mut records: Vec<(u64, User)> = self
            .users
            .iter()
            .filter(|r| name.map_or(true, |n| r.user.name == n))
            .map(|r| (r.seq, r.user.clone()))
            .collect();
        records.sort_by_key(|(seq, _)| *seq);

        let skip = (page.max(1) as usize - 1) * page_size as usize;
        records
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .map(|(_, user)| user)
            .collect()
    }

    /// Re-point the email index when a user's email changes. Fails with a
    /// conflict when the new address belongs to someone else.
    fn reindex_email(&self, id: &str, old_email: &str, new_email: &str) -> Result<()> {
        let old_key = old_email.to_lowercase();
        let new_key = new_email.to_lowercase();
        if old_key == new_key {
            return Ok(());
        }

        match self.emails.entry(new_key) {
            MapEntry::Occupied(_) => {
                return Err(Error::conflict(format!(
                    "email '{new_email}' is already registered"
                )))
            }
            MapEntry::Vacant(slot) => {
                slot.insert(id.to_string());
            }
        }
        self.emails.remove(&old_key);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new: NewUser) -> Result<User> {
        let id = Uuid::new_v4().to_string();

        match self.emails.entry(new.email.to_lowercase()) {
            MapEntry::Occupied(_) => {
                return Err(Error::conflict(format!(
                    "email '{}' is already registered",
                    new.email
                )))
            }
            MapEntry::Vacant(slot) => {
                slot.insert(id.clone());
            }
        }

        let user = User {
            id: id.clone(),
            name: new.name,
            email: new.email,
            permission: new.permission,
            password_hash: new.password_hash,
            email_verified: new.email_verified,
            image: new.image,
        };
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        self.users.insert(
            id,
            Record {
                user: user.clone(),
                seq,
            },
        );
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.get(id).map(|r| r.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        // Copy the id out so the email shard guard is released before the
        // users map is locked. replace/update take the locks in the opposite
        // order; holding both here can deadlock against them.
        let id = match self.emails.get(&email.to_lowercase()) {
            Some(entry) => entry.value().clone(),
            None => return Ok(None),
        };
        Ok(self.users.get(&id).map(|r| r.user.clone()))
    }

    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<User>> {
        Ok(self.page(page, page_size, None))
    }

    async fn list_by_name(&self, page: u32, page_size: u32, name: &str) -> Result<Vec<User>> {
        Ok(self.page(page, page_size, Some(name)))
    }

    async fn replace(&self, id: &str, data: UserReplacement) -> Result<User> {
        let mut record = self
            .users
            .get_mut(id)
            .ok_or_else(|| Error::not_found(format!("user '{id}'")))?;

        self.reindex_email(id, &record.user.email, &data.email)?;
        record.user.name = data.name;
        record.user.email = data.email;
        record.user.permission = data.permission;
        record.user.image = data.image;
        Ok(record.user.clone())
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<User> {
        let mut record = self
            .users
            .get_mut(id)
            .ok_or_else(|| Error::not_found(format!("user '{id}'")))?;

        if let Some(email) = patch.email {
            self.reindex_email(id, &record.user.email, &email)?;
            record.user.email = email;
        }
        if let Some(name) = patch.name {
            record.user.name = name;
        }
        if let Some(permission) = patch.permission {
            record.user.permission = permission;
        }
        if let Some(image) = patch.image {
            record.user.image = image;
        }
        Ok(record.user.clone())
    }

    async fn set_password_hash(&self, id: &str, hash: &str) -> Result<()> {
        let mut record = self
            .users
            .get_mut(id)
            .ok_or_else(|| Error::not_found(format!("user '{id}'")))?;
        record.user.password_hash = hash.to_string();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let Some((_, record)) = self.users.remove(id) else {
            return Ok(false);
        };
        self.emails.remove(&record.user.email.to_lowercase());
        Ok(true)
    }
}
