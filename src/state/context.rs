//! Session context
//!
//! The single handle through which clients and services read and clear
//! session tokens. It is passed to every client at construction time, so
//! tests can hand in a [`MemoryTokenStore`](super::MemoryTokenStore) instead
//! of a file on disk.

use std::sync::Arc;
use serde_json::Value;
use tracing::debug;
use super::memory::MemoryTokenStore;
use super::storage::{StorageKey, TokenStore};
use crate::models::{Role, TokenScope};
use crate::utils::errors::Result;
use crate::utils::logging;

/// Shared, cheaply clonable view over a [`TokenStore`]
#[derive(Debug, Clone)]
pub struct SessionContext {
    store: Arc<dyn TokenStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Context over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Token for a role, if one is stored
    pub fn token(&self, role: Role) -> Result<Option<String>> {
        self.store.get(StorageKey::Token(role))
    }

    pub fn set_token(&self, role: Role, token: &str) -> Result<()> {
        self.store.set(StorageKey::Token(role), token)?;
        logging::log_session_event(role, "token_stored");
        Ok(())
    }

    pub fn clear_token(&self, role: Role) -> Result<()> {
        self.store.remove(StorageKey::Token(role))?;
        logging::log_session_event(role, "token_cleared");
        Ok(())
    }

    /// Cached profile for a role. Unparseable blobs read as absent.
    pub fn profile(&self, role: Role) -> Result<Option<Value>> {
        let raw = self.store.get(StorageKey::Profile(role))?;
        Ok(raw.and_then(|raw| match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(role = %role, error = %e, "Ignoring unreadable cached profile");
                None
            }
        }))
    }

    pub fn set_profile(&self, role: Role, profile: &Value) -> Result<()> {
        let serialized = serde_json::to_string(profile)?;
        self.store.set(StorageKey::Profile(role), &serialized)
    }

    pub fn clear_profile(&self, role: Role) -> Result<()> {
        self.store.remove(StorageKey::Profile(role))
    }

    /// Drop both token and cached profile for a role
    pub fn clear(&self, role: Role) -> Result<()> {
        self.store
            .remove_many(&[StorageKey::Token(role), StorageKey::Profile(role)])?;
        logging::log_session_event(role, "session_cleared");
        Ok(())
    }

    /// Clear the token of every role in the scope
    pub fn clear_scope(&self, scope: &TokenScope) -> Result<()> {
        let keys: Vec<StorageKey> = scope.roles().iter().map(|r| StorageKey::Token(*r)).collect();
        self.store.remove_many(&keys)?;
        for role in scope.roles() {
            logging::log_session_event(*role, "token_cleared");
        }
        Ok(())
    }

    /// Clear the admin, user and trainer tokens
    pub fn clear_all_tokens(&self) -> Result<()> {
        self.clear_scope(&TokenScope::facade())
    }

    /// Token to attach for a scope: the first present one in scope order
    pub fn resolve(&self, scope: &TokenScope) -> Result<Option<String>> {
        for role in scope.roles() {
            if let Some(token) = self.token(*role)? {
                return Ok(Some(token));
            }
        }
        Ok(None)
    }

    /// Roles that currently hold a token, in priority order
    pub fn logged_in_roles(&self) -> Result<Vec<Role>> {
        let mut roles = Vec::new();
        for role in Role::PRIORITY {
            if self.token(role)?.is_some() {
                roles.push(role);
            }
        }
        Ok(roles)
    }
}
