//! Pipeline orchestration.
//!
//! [`Packager`] runs the fixed packaging sequence: validate the bundle
//! path, stage the image contents, create the writable image, verify
//! the `Applications` shortcut in the mounted image, and convert the
//! result to the compressed distributable.

use crate::bundler::staging::StagingArea;
use crate::bundler::{Error, Result, Settings, image};
use std::path::PathBuf;

/// Orchestrates one packaging run.
///
/// # Examples
///
/// ```no_run
/// use dmgpack::bundler::{Packager, SettingsBuilder};
///
/// # async fn example() -> dmgpack::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .bundle_path("MyApp.app")
///     .output_path("MyApp.dmg")
///     .build()?;
///
/// let dmg_path = Packager::new(settings).run().await?;
/// println!("Created DMG: {}", dmg_path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packager {
    settings: Settings,
}

impl Packager {
    /// Creates a packager for the given settings.
    pub fn new(settings: Settings) -> Self {
        Packager { settings }
    }

    /// Runs the pipeline and returns the path of the compressed image.
    ///
    /// The first failing step aborts the run. The staging directory
    /// and the verification mount point are removed on every exit
    /// path; a writable image orphaned by a late failure is left on
    /// disk for inspection.
    pub async fn run(&self) -> Result<PathBuf> {
        let bundle_path = self.settings.bundle_path();
        if !bundle_path.exists() {
            return Err(Error::BundleNotFound(bundle_path.to_path_buf()));
        }

        image::ensure_hdiutil()?;

        log::info!(
            "Packaging {} (volume {:?})",
            bundle_path.display(),
            self.settings.volume_name()
        );

        let staging = StagingArea::assemble(bundle_path).await?;

        let writable = self.settings.writable_image_path();
        image::create_writable(staging.path(), &writable, self.settings.volume_name()).await?;

        image::verify_applications_link(&writable).await?;

        image::convert_to_compressed(&writable, self.settings.output_path()).await?;

        Ok(self.settings.output_path().to_path_buf())
    }
}
