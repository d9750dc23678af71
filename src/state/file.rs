//! File-backed session store
//!
//! Keeps every entry in one JSON object on disk so a session survives
//! process restarts. The whole file is rewritten on each change.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};
use super::storage::{StorageKey, TokenStore};
use crate::utils::errors::{ApexError, Result};

/// Name of the session file inside the session directory
pub const SESSION_FILE_NAME: &str = "session.json";

/// Session store persisted as `session.json`
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileTokenStore {
    /// Open the store in `directory`, creating the directory if needed
    pub fn open(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref();
        fs::create_dir_all(directory)?;
        let path = directory.join(SESSION_FILE_NAME);
        let entries = Self::load(&path)?;

        debug!(path = %path.display(), entries = entries.len(), "Opened session file");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // A corrupt file means "logged out everywhere"
                warn!(path = %path.display(), error = %e, "Discarding unreadable session file");
                Ok(BTreeMap::new())
            }
        }
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let serialized = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            // Tokens are credentials: owner read/write only
            options.mode(0o600);
        }

        let mut file = options.open(&tmp)?;
        file.write_all(serialized.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Apply `change` to a copy of the entries and keep it only once it is on disk
    fn update<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let mut entries = self.lock()?;
        let mut next = entries.clone();
        if !change(&mut next) {
            return Ok(());
        }

        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| ApexError::Storage("session file lock poisoned".to_string()))
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>> {
        Ok(self.lock()?.get(key.as_str()).cloned())
    }

    fn set(&self, key: StorageKey, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.as_str().to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        self.update(|entries| entries.remove(key.as_str()).is_some())
    }

    fn remove_many(&self, keys: &[StorageKey]) -> Result<()> {
        self.update(|entries| {
            let mut changed = false;
            for key in keys {
                changed |= entries.remove(key.as_str()).is_some();
            }
            changed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileTokenStore::open(dir.path()).unwrap();
            store.set(StorageKey::Token(Role::Trainer), "t-123").unwrap();
            store.set(StorageKey::Profile(Role::Trainer), r#"{"name":"Sam"}"#).unwrap();
        }

        let reopened = FileTokenStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get(StorageKey::Token(Role::Trainer)).unwrap().as_deref(), Some("t-123"));
        assert_eq!(
            reopened.get(StorageKey::Profile(Role::Trainer)).unwrap().as_deref(),
            Some(r#"{"name":"Sam"}"#)
        );
    }

    #[test]
    fn test_file_uses_storage_key_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::open(dir.path()).unwrap();
        store.set(StorageKey::Token(Role::Admin), "a-1").unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.get("adminToken").map(String::as_str), Some("a-1"));
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SESSION_FILE_NAME), "not json").unwrap();

        let store = FileTokenStore::open(dir.path()).unwrap();
        assert_eq!(store.get(StorageKey::Token(Role::User)).unwrap(), None);
    }

    #[test]
    fn test_remove_many() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::open(dir.path()).unwrap();
        for role in Role::PRIORITY {
            store.set(StorageKey::Token(role), "x").unwrap();
        }

        store
            .remove_many(&[StorageKey::Token(Role::Admin), StorageKey::Token(Role::User)])
            .unwrap();

        let reopened = FileTokenStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get(StorageKey::Token(Role::Admin)).unwrap(), None);
        assert_eq!(reopened.get(StorageKey::Token(Role::Trainer)).unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_failed_write_keeps_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::open(dir.path()).unwrap();
        store.set(StorageKey::Token(Role::User), "u-1").unwrap();

        // A directory where the temp file goes makes every write fail
        fs::create_dir(store.path().with_extension("json.tmp")).unwrap();

        assert!(store.remove(StorageKey::Token(Role::User)).is_err());
        assert!(store.set(StorageKey::Token(Role::Admin), "a-1").is_err());

        assert_eq!(store.get(StorageKey::Token(Role::User)).unwrap().as_deref(), Some("u-1"));
        assert_eq!(store.get(StorageKey::Token(Role::Admin)).unwrap(), None);

        let raw = fs::read_to_string(store.path()).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("userToken").map(String::as_str), Some("u-1"));
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::open(dir.path()).unwrap();
        store.set(StorageKey::Token(Role::Admin), "a-1").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
