//! Staging-area assembly for disk-image creation.
//!
//! The staging directory holds exactly what ends up inside the image:
//! a copy of the application bundle and an `Applications` symlink for
//! drag-to-install.

use crate::bundler::error::{Context, Error, ErrorExt, Result};
use crate::bundler::utils::fs;
use path_absolutize::Absolutize;
use std::path::Path;
use tempfile::TempDir;

/// Temporary directory staged with the image contents.
///
/// The directory is removed when the value is dropped, on every exit
/// path.
#[derive(Debug)]
pub struct StagingArea {
    dir: TempDir,
}

impl StagingArea {
    /// Assembles a staging directory for the given application bundle.
    ///
    /// Copies the bundle under its original file name and places an
    /// `Applications` symlink next to it.
    pub async fn assemble(bundle_path: &Path) -> Result<StagingArea> {
        // The copy and hdiutil both run from other working contexts,
        // so the bundle path must be absolute.
        let bundle = bundle_path
            .absolutize()
            .fs_context("resolving bundle path", bundle_path)?;

        let dir = tempfile::Builder::new()
            .prefix("dmgpack-staging")
            .tempdir()
            .fs_context("creating staging directory", std::env::temp_dir())?;

        let app_name = bundle.file_name().ok_or_else(|| {
            Error::GenericError(format!("invalid bundle path: {}", bundle.display()))
        })?;
        let staged_app = dir.path().join(app_name);

        log::debug!("Copying {} to staging", bundle.display());
        fs::copy_dir(&bundle, &staged_app).await.with_context(|| {
            format!(
                "copying bundle to staging directory: {}",
                staged_app.display()
            )
        })?;

        #[cfg(unix)]
        {
            let applications_link = dir.path().join("Applications");
            fs::symlink_dir(Path::new("/Applications"), &applications_link)
                .fs_context("creating Applications symlink", &applications_link)?;
        }

        Ok(StagingArea { dir })
    }

    /// Path of the staging directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
