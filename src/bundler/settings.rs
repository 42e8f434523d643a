//! Configuration for a packaging run.

use crate::bundler::error::{Context, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Volume name used when the caller does not provide one.
pub const DEFAULT_VOLUME_NAME: &str = "My DMG";

/// Resolved configuration for one packaging run, constructed via
/// [`SettingsBuilder`].
///
/// # Examples
///
/// ```
/// use dmgpack::bundler::SettingsBuilder;
///
/// # fn example() -> dmgpack::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .bundle_path("MyApp.app")
///     .output_path("MyApp.dmg")
///     .volume_name("Cool App")
///     .build()?;
///
/// assert_eq!(settings.volume_name(), "Cool App");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Settings {
    bundle_path: PathBuf,
    output_path: PathBuf,
    volume_name: String,
}

impl Settings {
    /// Path of the application bundle to package.
    pub fn bundle_path(&self) -> &Path {
        &self.bundle_path
    }

    /// Destination path of the compressed image.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Volume name shown when the image is mounted.
    pub fn volume_name(&self) -> &str {
        &self.volume_name
    }

    /// Path of the intermediate writable image.
    ///
    /// Derived from the output path by replacing its final extension
    /// with a `_temp.dmg` suffix: `Output.dmg` becomes
    /// `Output_temp.dmg`. An extensionless output just gains the
    /// suffix.
    pub fn writable_image_path(&self) -> PathBuf {
        let mut name = self
            .output_path
            .file_stem()
            .map(OsStr::to_os_string)
            .unwrap_or_default();
        name.push("_temp.dmg");
        self.output_path.with_file_name(name)
    }
}

/// Builder for [`Settings`].
///
/// Bundle and output paths are required; the volume name falls back to
/// [`DEFAULT_VOLUME_NAME`].
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    bundle_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    volume_name: Option<String>,
}

impl SettingsBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path of the application bundle to package.
    pub fn bundle_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bundle_path = Some(path.into());
        self
    }

    /// Sets the destination path of the compressed image.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Sets the volume name shown when the image is mounted.
    ///
    /// An empty name is treated as absent.
    pub fn volume_name(mut self, name: impl Into<String>) -> Self {
        self.volume_name = Some(name.into());
        self
    }

    /// Builds the settings, applying the default volume name when none
    /// was provided.
    pub fn build(self) -> Result<Settings> {
        Ok(Settings {
            bundle_path: self.bundle_path.context("bundle_path is required")?,
            output_path: self.output_path.context("output_path is required")?,
            volume_name: self
                .volume_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_VOLUME_NAME.to_string()),
        })
    }
}
