//! Session storage abstraction
//!
//! Tokens and cached profiles are plain strings under fixed keys. Stores are
//! read on every request and written only on login and logout, so a simple
//! last-write-wins map is enough.

use std::fmt;
use crate::models::Role;
use crate::utils::errors::Result;

/// Every key the client persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Token(Role),
    Profile(Role),
}

impl StorageKey {
    /// Name of the key in persisted storage
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Token(Role::Admin) => "adminToken",
            StorageKey::Token(Role::User) => "userToken",
            StorageKey::Token(Role::Trainer) => "trainerToken",
            StorageKey::Profile(Role::Admin) => "admin",
            StorageKey::Profile(Role::User) => "user",
            StorageKey::Profile(Role::Trainer) => "trainer",
        }
    }

    pub fn all() -> [StorageKey; 6] {
        [
            StorageKey::Token(Role::Admin),
            StorageKey::Token(Role::User),
            StorageKey::Token(Role::Trainer),
            StorageKey::Profile(Role::Admin),
            StorageKey::Profile(Role::User),
            StorageKey::Profile(Role::Trainer),
        ]
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synchronous key/value persistence for session data
pub trait TokenStore: Send + Sync + fmt::Debug {
    /// Read a value, `None` when absent
    fn get(&self, key: StorageKey) -> Result<Option<String>>;

    /// Overwrite a value
    fn set(&self, key: StorageKey, value: &str) -> Result<()>;

    /// Delete a value. Deleting an absent key succeeds.
    fn remove(&self, key: StorageKey) -> Result<()>;

    /// Delete several values at once
    fn remove_many(&self, keys: &[StorageKey]) -> Result<()> {
        for key in keys {
            self.remove(*key)?;
        }
        Ok(())
    }
}
