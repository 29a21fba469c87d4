//! Platform-specific code for Folio
//!
//! This crate reads signals the host environment owns, such as whether the
//! operating system is set to a dark color scheme.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod appearance;

pub use appearance::{FixedAppearance, NoAppearance, OsAppearance, SystemAppearance};
