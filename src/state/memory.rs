//! In-memory session store

use std::collections::HashMap;
use std::sync::RwLock;
use super::storage::{StorageKey, TokenStore};
use crate::utils::errors::{ApexError, Result};

/// Session store that lives as long as the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<StorageKey, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> ApexError {
    ApexError::Storage("session store lock poisoned".to_string())
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(&key).cloned())
    }

    fn set(&self, key: StorageKey, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(&key);
        Ok(())
    }
}
