//! Client-local string storage
//!
//! [`LocalStorage`] is the seam between preference code and whatever holds
//! the bytes: a sled database on disk, a map in memory, or nothing at all
//! when the host has storage disabled.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::string::FromUtf8Error;
use std::sync::Arc;
use thiserror::Error;

/// Storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Stored bytes were not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(#[from] FromUtf8Error),

    /// Storage is disabled or does not exist in this context
    #[error("Storage unavailable")]
    Unavailable,

    /// Any other backend failure (quota, permissions, ...)
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// String-valued key/value storage that survives across sessions
#[cfg_attr(test, mockall::automock)]
pub trait LocalStorage: Send + Sync {
    /// Get the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`, returning whether it was present
    fn remove_item(&self, key: &str) -> Result<bool>;
}

impl<S: LocalStorage + ?Sized> LocalStorage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        (**self).remove_item(key)
    }
}

impl<S: LocalStorage + ?Sized> LocalStorage for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        (**self).remove_item(key)
    }
}

/// Process-local storage that forgets everything when dropped
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        Ok(self.items.write().remove(key).is_some())
    }
}

/// Storage for contexts where nothing can be persisted
///
/// Every operation fails with [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl LocalStorage for UnavailableStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<bool> {
        Err(StorageError::Unavailable)
    }
}
