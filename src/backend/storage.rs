//! Local persistent storage for the credential token.
//!
//! The file layout mirrors browser local storage: one flat JSON object of
//! string keys to string values. Only one key (the configured token key) is
//! ever touched by the application.

#[cfg(test)]
use crate::backend::utils::config::StorageConfig;
use crate::utils::Result;
use std::collections::BTreeMap;
#[cfg(test)]
use std::collections::HashMap;
use std::path::PathBuf;
#[cfg(test)]
use std::sync::Mutex;

/// Capability to read, write and forget the credential token.
pub trait CredentialStore: Send + Sync {
    fn get(&self) -> Result<Option<String>>;
    fn set(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// JSON-file backed store, one file shared by every key.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = std::fs::read_to_string(&self.path)?;
        if json.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&json)?)
    }

    /// Unreadable contents are dropped so a corrupt file can still be overwritten.
    fn read_items_or_reset(&self) -> BTreeMap<String, String> {
        self.read_items().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable storage file {}: {e}", self.path.display());
            BTreeMap::new()
        })
    }

    fn write_items(&self, items: &BTreeMap<String, String>) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(items)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl CredentialStore for FileStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.read_items()?.remove(&self.key))
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut items = self.read_items_or_reset();
        items.insert(self.key.clone(), token.to_string());
        self.write_items(&items)
    }

    fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let mut items = self.read_items_or_reset();
        items.remove(&self.key);
        self.write_items(&items)
    }
}

/// In-memory store, used where nothing should touch the disk.
#[cfg(test)]
#[derive(Debug)]
pub struct MemoryStore {
    key: String,
    items: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn with_token(self, token: &str) -> Self {
        if let Ok(mut items) = self.items.lock() {
            items.insert(self.key.clone(), token.to_string());
        }
        self
    }
}

#[cfg(test)]
impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(StorageConfig::default().token_key)
    }
}

#[cfg(test)]
impl CredentialStore for MemoryStore {
    fn get(&self) -> Result<Option<String>> {
        let items = self
            .items
            .lock()
            .map_err(|_| crate::simple_error!("Memory store lock poisoned"))?;
        Ok(items.get(&self.key).cloned())
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| crate::simple_error!("Memory store lock poisoned"))?;
        items.insert(self.key.clone(), token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| crate::simple_error!("Memory store lock poisoned"))?;
        items.remove(&self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "frontdoor-storage-{}-{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir.join("local_storage.json")
    }

    #[test]
    fn file_store_starts_empty() {
        let store = FileStore::new(scratch_file("empty"), "token");
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let path = scratch_file("persist");
        FileStore::new(&path, "token").set("abc123").unwrap();

        let reopened = FileStore::new(&path, "token");

        assert_eq!(reopened.get().unwrap().as_deref(), Some("abc123"));
    }

    #[test]
    fn file_store_clear_keeps_other_keys() {
        let path = scratch_file("other-keys");
        FileStore::new(&path, "theme").set("dark").unwrap();
        let store = FileStore::new(&path, "token");
        store.set("abc123").unwrap();

        store.clear().unwrap();

        assert_eq!(store.get().unwrap(), None);
        assert_eq!(
            FileStore::new(&path, "theme").get().unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn file_store_clear_without_file_is_noop() {
        let path = scratch_file("no-file");
        let store = FileStore::new(&path, "token");

        store.clear().unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_fails_reads_but_clear_recovers() {
        let path = scratch_file("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ token: ").unwrap();
        let store = FileStore::new(&path, "token");

        assert!(store.get().is_err());
        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn set_replaces_a_corrupt_file() {
        let path = scratch_file("corrupt-set");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ token: ").unwrap();
        let store = FileStore::new(&path, "token");

        store.set("abc123").unwrap();

        assert_eq!(store.get().unwrap().as_deref(), Some("abc123"));
    }

    #[test]
    fn memory_store_honours_its_key() {
        let store = MemoryStore::new("session").with_token("abc123");
        assert_eq!(store.get().unwrap().as_deref(), Some("abc123"));
        assert_eq!(store.key, "session");

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn memory_store_set_get_clear() {
        let store = MemoryStore::default();
        assert_eq!(store.get().unwrap(), None);

        store.set("abc123").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("abc123"));

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }
}
