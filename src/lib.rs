//! # dmgpack
//!
//! Drag-to-install DMG packaging for macOS application bundles.
//!
//! dmgpack stages an application bundle together with an `Applications`
//! shortcut, builds a writable disk image from the staging area with the
//! native `hdiutil` tool, mounts the image to verify the shortcut, and
//! converts the result into a compressed distributable image.
//!
//! ## Usage
//!
//! ```bash
//! dmgpack MyApp.app MyApp.dmg              # default volume name
//! dmgpack MyApp.app MyApp.dmg "Cool App"   # explicit volume name
//! ```
//!
//! The pipeline lives in [`bundler`]; [`cli`] provides the binary
//! surface.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod bundler;
pub mod cli;

// Re-export main types for public API
pub use bundler::{Error, Packager, Result, Settings, SettingsBuilder};
pub use cli::Args;
