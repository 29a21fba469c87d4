//! Storage layer for Folio
//!
//! This crate provides client-local key-value storage and the persisted
//! theme preference that lives in it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod local;
pub mod preferences;

pub use kv::{KvConfig, KvStore};
pub use local::{LocalStorage, MemoryStorage, Result, StorageError, UnavailableStorage};
pub use preferences::{StoredPreference, ThemeMode, ThemeModeParseError, THEME_KEY};
