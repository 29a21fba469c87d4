//! Persisted display preferences
//!
//! The theme preference is a single string entry in local storage, keyed by
//! [`THEME_KEY`] and holding either `"light"` or `"dark"`.

use crate::local::{LocalStorage, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key for the theme preference
pub const THEME_KEY: &str = "theme";

/// Display mode for the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode
    #[default]
    Light,
    /// Dark mode
    Dark,
}

impl ThemeMode {
    /// Both modes, light first
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// The stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Check if this is the dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Mode matching a "prefers dark" signal
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a theme mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown theme mode: {0:?}")]
pub struct ThemeModeParseError(pub String);

impl std::str::FromStr for ThemeMode {
    type Err = ThemeModeParseError;

    // Exact match only: a stored "Dark" was not written by us.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ThemeModeParseError(s.to_string())),
        }
    }
}

/// The user's saved theme, backed by local storage
#[derive(Debug, Clone)]
pub struct StoredPreference<S> {
    store: S,
    key: String,
}

impl<S: LocalStorage> StoredPreference<S> {
    /// Preference stored under [`THEME_KEY`]
    pub fn new(store: S) -> Self {
        Self::with_key(store, THEME_KEY)
    }

    /// Preference stored under a custom key
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// The storage key in use
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the saved mode
    ///
    /// Returns `Ok(None)` when nothing is stored or the stored value is not
    /// a valid mode. Storage failures are returned as errors.
    pub fn read(&self) -> Result<Option<ThemeMode>> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(None);
        };

        match raw.parse::<ThemeMode>() {
            Ok(mode) => Ok(Some(mode)),
            Err(e) => {
                tracing::debug!(key = %self.key, "ignoring stored preference: {}", e);
                Ok(None)
            }
        }
    }

    /// Save a mode
    pub fn write(&self, mode: ThemeMode) -> Result<()> {
        self.store.set_item(&self.key, mode.as_str())
    }
}
