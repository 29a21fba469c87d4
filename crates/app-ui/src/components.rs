//! UI components for Folio
//!
//! Components are plain serializable structs that a renderer turns into
//! markup. They carry no styling of their own.

use crate::theme::{ThemeMode, ThemeState};
use serde::{Deserialize, Serialize};
use storage::LocalStorage;

/// Icon shown while the page is dark (offers the light mode)
pub const SUN_ICON: &str = "☀️";

/// Icon shown while the page is light (offers the dark mode)
pub const MOON_ICON: &str = "🌙";

/// The nav bar button that flips the theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeToggle {
    /// Accessible label
    pub aria_label: String,
    /// Glyph rendered inside the button
    pub icon: String,
    /// CSS classes for the button
    pub class_name: String,
}

impl ThemeToggle {
    /// Button props for the given active mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        let icon = match mode {
            ThemeMode::Dark => SUN_ICON,
            ThemeMode::Light => MOON_ICON,
        };

        Self {
            aria_label: "Toggle theme".to_string(),
            icon: icon.to_string(),
            class_name: "nav__icon nav__toggle".to_string(),
        }
    }

    /// Button props for the state's current mode
    pub fn from_state<S: LocalStorage>(state: &ThemeState<S>) -> Self {
        Self::for_mode(state.mode())
    }

    /// Handle a click: flip the theme and return the re-rendered button
    pub fn click<S: LocalStorage>(state: &mut ThemeState<S>) -> Self {
        Self::for_mode(state.toggle())
    }
}
