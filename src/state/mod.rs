//! Session state module
//!
//! Token and profile persistence, plus the injectable session context the
//! HTTP clients read from.

pub mod context;
pub mod file;
pub mod memory;
pub mod storage;

// Re-export commonly used state components
pub use context::SessionContext;
pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;
pub use storage::{StorageKey, TokenStore};

use std::sync::Arc;
use crate::config::{SessionConfig, StorageBackend};
use crate::utils::errors::Result;

/// Build the session context described by configuration
pub fn open_session(config: &SessionConfig) -> Result<SessionContext> {
    let store: Arc<dyn TokenStore> = match config.storage {
        StorageBackend::Memory => Arc::new(MemoryTokenStore::new()),
        StorageBackend::File => Arc::new(FileTokenStore::open(&config.directory)?),
    };
    Ok(SessionContext::new(store))
}
