//! User interface state for Folio
//!
//! This crate owns the page's light/dark display mode: how it is chosen at
//! startup, how it changes, and the props a renderer needs to show it.
//!
//! # Modules
//!
//! - [`theme`] - Theme preference resolver and owned theme state
//! - [`components`] - View models for theme-aware components
//!
//! # Example
//!
//! ```rust
//! use app_platform::OsAppearance;
//! use app_ui::{ThemeConfig, ThemeState, ThemeToggle};
//! use storage::MemoryStorage;
//!
//! let mut state = ThemeState::initialize(MemoryStorage::new(), OsAppearance, &ThemeConfig::default());
//! let before = state.mode();
//!
//! let button = ThemeToggle::click(&mut state);
//! assert_eq!(state.mode(), before.toggle());
//! assert_eq!(button, ThemeToggle::for_mode(state.mode()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod theme;

// Re-export commonly used types
pub use theme::{
    apply_root_classes, css_class, toggle, FnThemeProvider, StoredThemeProvider,
    SystemThemeProvider, ThemeConfig, ThemeMode, ThemePreferenceResolver, ThemeProvider,
    ThemeState,
};

pub use components::{ThemeToggle, MOON_ICON, SUN_ICON};
