//! Folio
//!
//! Light/dark theme preference for a single-page portfolio. The work is
//! split across the workspace crates; this crate re-exports them under one
//! name.
//!
//! - [`storage`] - local key-value storage and the saved theme preference
//! - [`platform`] - the host's color scheme signal
//! - [`ui`] - theme resolution, owned theme state, toggle button props

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_platform as platform;
pub use app_ui as ui;
pub use storage;

pub use app_platform::{FixedAppearance, NoAppearance, OsAppearance, SystemAppearance};
pub use app_ui::{ThemeConfig, ThemeMode, ThemePreferenceResolver, ThemeState, ThemeToggle};
pub use storage::{KvConfig, KvStore, LocalStorage, MemoryStorage, StoredPreference};
