//! Theme preference resolution and owned theme state
//!
//! The page has exactly two display modes. Which one is active at startup is
//! decided by an ordered chain of [`ThemeProvider`]s: the user's saved
//! preference first, then the operating system's color scheme, then a fixed
//! fallback. After startup the mode only changes through [`ThemeState`],
//! which writes every change back to local storage.
//!
//! # Usage
//!
//! ```rust
//! use app_platform::FixedAppearance;
//! use app_ui::theme::{ThemeConfig, ThemeMode, ThemeState};
//! use storage::MemoryStorage;
//!
//! let mut state = ThemeState::initialize(
//!     MemoryStorage::new(),
//!     &FixedAppearance::DARK,
//!     &ThemeConfig::default(),
//! );
//! assert_eq!(state.mode(), ThemeMode::Dark);
//!
//! state.toggle();
//! assert_eq!(state.mode(), ThemeMode::Light);
//! ```

use app_platform::SystemAppearance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use storage::{LocalStorage, StorageError, StoredPreference, THEME_KEY};

pub use storage::ThemeMode;

// =============================================================================
// Configuration
// =============================================================================

/// Theme resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Local storage key holding the saved mode
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Mode used when neither storage nor the system has an answer
    #[serde(default)]
    pub fallback: ThemeMode,
    /// Write the resolved mode to storage right after startup
    #[serde(default = "default_true")]
    pub persist_on_init: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            fallback: ThemeMode::Light,
            persist_on_init: true,
        }
    }
}

impl ThemeConfig {
    /// Set the storage key
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the fallback mode
    pub fn fallback(mut self, mode: ThemeMode) -> Self {
        self.fallback = mode;
        self
    }

    /// Enable or disable the startup write
    pub fn persist_on_init(mut self, enabled: bool) -> Self {
        self.persist_on_init = enabled;
        self
    }
}

fn default_storage_key() -> String {
    THEME_KEY.to_string()
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Providers
// =============================================================================

/// One source of an initial theme mode
pub trait ThemeProvider {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// The mode this source asks for, if any
    fn provide(&self) -> Option<ThemeMode>;
}

/// Reads the user's saved preference
pub struct StoredThemeProvider<'a, S> {
    preference: &'a StoredPreference<S>,
}

impl<'a, S: LocalStorage> StoredThemeProvider<'a, S> {
    /// Create a provider over a stored preference
    pub fn new(preference: &'a StoredPreference<S>) -> Self {
        Self { preference }
    }
}

impl<S: LocalStorage> ThemeProvider for StoredThemeProvider<'_, S> {
    fn name(&self) -> &'static str {
        "stored"
    }

    fn provide(&self) -> Option<ThemeMode> {
        match self.preference.read() {
            Ok(mode) => mode,
            Err(e) => {
                tracing::debug!(key = %self.preference.key(), "stored preference unreadable: {}", e);
                None
            }
        }
    }
}

/// Follows the host's color scheme
pub struct SystemThemeProvider<A> {
    appearance: A,
}

impl<A: SystemAppearance> SystemThemeProvider<A> {
    /// Create a provider over a system signal
    pub fn new(appearance: A) -> Self {
        Self { appearance }
    }
}

impl<A: SystemAppearance> ThemeProvider for SystemThemeProvider<A> {
    fn name(&self) -> &'static str {
        "system"
    }

    fn provide(&self) -> Option<ThemeMode> {
        self.appearance.prefers_dark().map(ThemeMode::from_prefers_dark)
    }
}

/// Provider backed by a closure
pub struct FnThemeProvider<F> {
    name: &'static str,
    f: F,
}

impl<F: Fn() -> Option<ThemeMode>> FnThemeProvider<F> {
    /// Create a named provider from a closure
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F: Fn() -> Option<ThemeMode>> ThemeProvider for FnThemeProvider<F> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn provide(&self) -> Option<ThemeMode> {
        (self.f)()
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Picks the initial mode from an ordered list of providers
pub struct ThemePreferenceResolver<'a> {
    providers: Vec<Box<dyn ThemeProvider + 'a>>,
    fallback: ThemeMode,
}

impl<'a> ThemePreferenceResolver<'a> {
    /// Create a resolver with no providers
    pub fn new(fallback: ThemeMode) -> Self {
        Self { providers: Vec::new(), fallback }
    }

    /// Stored preference, then system signal, then `config.fallback`
    pub fn standard<S, A>(
        preference: &'a StoredPreference<S>,
        appearance: A,
        config: &ThemeConfig,
    ) -> Self
    where
        S: LocalStorage,
        A: SystemAppearance + 'a,
    {
        Self::new(config.fallback)
            .with_provider(StoredThemeProvider::new(preference))
            .with_provider(SystemThemeProvider::new(appearance))
    }

    /// Append a provider; earlier providers win
    pub fn with_provider(mut self, provider: impl ThemeProvider + 'a) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Number of providers in the chain
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// First mode any provider answers with, or the fallback
    pub fn resolve_initial(&self) -> ThemeMode {
        for provider in &self.providers {
            if let Some(mode) = provider.provide() {
                tracing::debug!(provider = provider.name(), %mode, "resolved initial theme");
                return mode;
            }
        }

        tracing::debug!(mode = %self.fallback, "no theme provider answered, using fallback");
        self.fallback
    }
}

/// The other mode
pub fn toggle(current: ThemeMode) -> ThemeMode {
    current.toggle()
}

// =============================================================================
// Rendering helpers
// =============================================================================

/// Root class for a mode
pub fn css_class(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "theme-light",
        ThemeMode::Dark => "theme-dark",
    }
}

/// Replace whichever theme class is on the root with the one for `mode`
pub fn apply_root_classes(classes: &mut BTreeSet<String>, mode: ThemeMode) {
    for other in ThemeMode::ALL {
        classes.remove(css_class(other));
    }
    classes.insert(css_class(mode).to_string());
}

// =============================================================================
// Theme State
// =============================================================================

/// The active mode, owned by the rendering layer
///
/// Every change is written to storage. A failed write is logged and kept in
/// [`ThemeState::last_persist_error`]; the in-memory mode stays
/// authoritative either way.
#[derive(Debug)]
pub struct ThemeState<S> {
    mode: ThemeMode,
    preference: StoredPreference<S>,
    last_persist_error: Option<StorageError>,
}

impl<S: LocalStorage> ThemeState<S> {
    /// Resolve the startup mode and take ownership of the store
    pub fn initialize<A>(store: S, appearance: A, config: &ThemeConfig) -> Self
    where
        A: SystemAppearance,
    {
        let preference = StoredPreference::with_key(store, config.storage_key.clone());
        let mode = ThemePreferenceResolver::standard(&preference, appearance, config)
            .resolve_initial();

        let mut state = Self { mode, preference, last_persist_error: None };
        if config.persist_on_init {
            state.persist();
        }
        state
    }

    /// Wrap an already-known mode without touching storage
    pub fn with_mode(store: S, mode: ThemeMode, config: &ThemeConfig) -> Self {
        Self {
            mode,
            preference: StoredPreference::with_key(store, config.storage_key.clone()),
            last_persist_error: None,
        }
    }

    /// Current mode
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Check if the current mode is dark
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Root class for the current mode
    pub fn css_class(&self) -> &'static str {
        css_class(self.mode)
    }

    /// Switch to the other mode and save it
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = toggle(self.mode);
        self.persist();
        self.mode
    }

    /// Switch to `mode`, saving only if it differs from the current one
    pub fn set_mode(&mut self, mode: ThemeMode) -> ThemeMode {
        if mode != self.mode {
            self.mode = mode;
            self.persist();
        }
        self.mode
    }

    /// The error from the most recent failed write, if the last write failed
    pub fn last_persist_error(&self) -> Option<&StorageError> {
        self.last_persist_error.as_ref()
    }

    /// The stored preference this state writes to
    pub fn preference(&self) -> &StoredPreference<S> {
        &self.preference
    }

    fn persist(&mut self) {
        match self.preference.write(self.mode) {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                tracing::warn!(mode = %self.mode, "failed to save theme preference: {}", e);
                self.last_persist_error = Some(e);
            }
        }
    }
}
