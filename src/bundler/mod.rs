//! DMG packaging pipeline.
//!
//! Builds a distributable disk image from a macOS application bundle in
//! a fixed sequence:
//!
//! 1. Stage the bundle and an `Applications` shortcut in a temporary
//!    directory.
//! 2. Build a writable image from the staging area (`hdiutil create`).
//! 3. Mount the image and make sure the shortcut is present
//!    (`hdiutil attach` / `hdiutil detach`).
//! 4. Convert to a compressed read-only image (`hdiutil convert`) and
//!    delete the writable intermediate.
//!
//! # Build Requirements
//!
//! | Step | Required Tool | Notes |
//! |------|---------------|-------|
//! | create / attach / detach / convert | `hdiutil` | Built into macOS |
//! | staging copy | none | performed in-process |
//!
//! The staging directory and the verification mount point are removed
//! on every exit path. A writable image orphaned by a late failure is
//! left on disk for inspection.

mod builder;
mod error;
mod image;
mod settings;
mod staging;
mod utils;

// Public re-exports
pub use builder::Packager;
pub use error::{Context, Error, ErrorExt, Result};
pub use settings::{DEFAULT_VOLUME_NAME, Settings, SettingsBuilder};
pub use staging::StagingArea;
