//! Key-value storage trait and implementations

use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// Key-value storage trait
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`, a no-op when absent
    async fn remove(&self, key: &str) -> Result<()>;
}

/// File-based key-value store, one file per key
#[derive(Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).await?;
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;

        let path = self.entry_path(key);
        fs::write(&path, value).await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);

        if path.exists() {
            fs::remove_file(&path).await?;
        }

        Ok(())
    }
}

/// In-memory key-value store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_store_set_and_get() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        store.set("userId", "u1").await.unwrap();

        let value = store.get("userId").await.unwrap();
        assert_eq!(value.as_deref(), Some("u1"));
    }

    #[tokio::test]
    async fn test_file_store_missing_key() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        let value = store.get("nonexistent").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_file_store_remove() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        store.set("userId", "u1").await.unwrap();
        store.remove("userId").await.unwrap();

        assert!(store.get("userId").await.unwrap().is_none());

        // Removing an absent key is not an error
        store.remove("userId").await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryKeyValueStore::new();

        assert!(store.get("userId").await.unwrap().is_none());

        store.set("userId", "42").await.unwrap();
        assert_eq!(store.get("userId").await.unwrap().as_deref(), Some("42"));

        store.remove("userId").await.unwrap();
        assert!(store.get("userId").await.unwrap().is_none());
    }
}
