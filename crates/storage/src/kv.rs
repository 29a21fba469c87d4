//! Persistent key-value store for preferences
//!
//! This module provides a sled-backed implementation of [`LocalStorage`].
//! Values are stored as raw UTF-8 so the on-disk layout matches the
//! string entries a browser keeps in local storage.

use crate::local::{LocalStorage, Result};
use sled::Db;
use std::path::PathBuf;
use std::sync::Arc;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: PathBuf,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Flush interval in milliseconds (None for explicit flushes only)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("folio_kv.db"),
            cache_capacity: 1024 * 1024, // 1MB
            use_compression: false,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Key-value store implementation
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
}

impl KvStore {
    /// Open (or create) a key-value store with configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let db = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression)
            .flush_every_ms(config.flush_every_ms)
            .open()?;

        tracing::debug!(path = %config.path.display(), "opened key-value store");

        Ok(Self { db: Arc::new(db) })
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(String::from_utf8(bytes.to_vec())?)),
            None => Ok(None),
        }
    }

    /// Set a value by key
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db.insert(key.as_bytes(), value.as_bytes())?;
        Ok(())
    }

    /// Remove a value by key
    pub fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.db.contains_key(key.as_bytes())?)
    }

    /// Clear all data
    pub fn clear(&self) -> Result<()> {
        self.db.clear()?;
        Ok(())
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Get the number of keys in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

impl LocalStorage for KvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.get(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        self.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::StorageError;

    #[test]
    fn test_kv_store_creation() {
        let kv = KvStore::in_memory().unwrap();
        assert!(kv.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let kv = KvStore::in_memory().unwrap();

        kv.set("theme", "dark").unwrap();

        assert_eq!(kv.get("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_get_nonexistent() {
        let kv = KvStore::in_memory().unwrap();
        assert_eq!(kv.get("nonexistent").unwrap(), None);
    }

    #[test]
    fn test_values_are_stored_raw() {
        let kv = KvStore::in_memory().unwrap();
        kv.set("theme", "light").unwrap();

        let raw = kv.db.get(b"theme").unwrap().unwrap();
        assert_eq!(&raw[..], b"light");
    }

    #[test]
    fn test_invalid_utf8_is_an_encoding_error() {
        let kv = KvStore::in_memory().unwrap();
        kv.db.insert(b"theme", &[0xff, 0xfe][..]).unwrap();

        assert!(matches!(kv.get("theme"), Err(StorageError::Encoding(_))));
    }

    #[test]
    fn test_remove() {
        let kv = KvStore::in_memory().unwrap();

        kv.set("key", "value").unwrap();
        assert!(kv.contains("key").unwrap());

        assert!(kv.remove("key").unwrap());
        assert!(!kv.contains("key").unwrap());
        assert!(!kv.remove("key").unwrap());
    }

    #[test]
    fn test_clear() {
        let kv = KvStore::in_memory().unwrap();

        kv.set("key1", "value1").unwrap();
        kv.set("key2", "value2").unwrap();
        assert_eq!(kv.len(), 2);

        kv.clear().unwrap();
        assert!(kv.is_empty());
    }

    #[test]
    fn test_local_storage_impl() {
        let kv = KvStore::in_memory().unwrap();
        let storage: &dyn LocalStorage = &kv;

        storage.set_item("theme", "dark").unwrap();
        assert_eq!(storage.get_item("theme").unwrap(), Some("dark".to_string()));
        assert!(storage.remove_item("theme").unwrap());
        assert_eq!(storage.get_item("theme").unwrap(), None);
    }

    #[test]
    fn test_reopen_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let config = KvConfig::new(dir.path().join("prefs.db"));

        {
            let kv = KvStore::new(config.clone()).unwrap();
            kv.set("theme", "dark").unwrap();
            kv.flush().unwrap();
        }

        let kv = KvStore::new(config).unwrap();
        assert_eq!(kv.get("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_config_builder() {
        let config = KvConfig::new("test.db")
            .cache_capacity(32 * 1024 * 1024)
            .use_compression(true)
            .flush_every_ms(None);

        assert_eq!(config.path, PathBuf::from("test.db"));
        assert_eq!(config.cache_capacity, 32 * 1024 * 1024);
        assert!(config.use_compression);
        assert_eq!(config.flush_every_ms, None);
    }
}
