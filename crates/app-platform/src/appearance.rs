//! System color scheme signal
//!
//! [`SystemAppearance`] answers one question: does the host prefer a dark
//! color scheme? `None` means the host could not say, which callers treat
//! the same as "no preference".

use dark_light::Mode;

/// Read-only dark-mode preference of the host environment
pub trait SystemAppearance: Send + Sync {
    /// `Some(true)` if the host prefers dark, `Some(false)` if it prefers
    /// light, `None` if the signal is unavailable
    fn prefers_dark(&self) -> Option<bool>;
}

impl<T: SystemAppearance + ?Sized> SystemAppearance for &T {
    fn prefers_dark(&self) -> Option<bool> {
        (**self).prefers_dark()
    }
}

impl<T: SystemAppearance + ?Sized> SystemAppearance for Box<T> {
    fn prefers_dark(&self) -> Option<bool> {
        (**self).prefers_dark()
    }
}

/// Queries the operating system color scheme
#[derive(Debug, Clone, Copy, Default)]
pub struct OsAppearance;

impl OsAppearance {
    /// Create an OS-backed signal
    pub fn new() -> Self {
        Self
    }
}

impl SystemAppearance for OsAppearance {
    fn prefers_dark(&self) -> Option<bool> {
        match dark_light::detect() {
            Ok(mode) => mode_prefers_dark(mode),
            Err(e) => {
                tracing::debug!("color scheme detection failed: {}", e);
                None
            }
        }
    }
}

fn mode_prefers_dark(mode: Mode) -> Option<bool> {
    match mode {
        Mode::Dark => Some(true),
        Mode::Light => Some(false),
        Mode::Unspecified => None,
    }
}

/// A signal that never changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAppearance(pub bool);

impl FixedAppearance {
    /// Host that prefers dark
    pub const DARK: FixedAppearance = FixedAppearance(true);
    /// Host that prefers light
    pub const LIGHT: FixedAppearance = FixedAppearance(false);
}

impl SystemAppearance for FixedAppearance {
    fn prefers_dark(&self) -> Option<bool> {
        Some(self.0)
    }
}

/// Host with no color scheme signal (headless or non-graphical context)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAppearance;

impl SystemAppearance for NoAppearance {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }
}
