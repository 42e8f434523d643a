//! Disk-image operations over hdiutil.
//!
//! Every image step shells out to the native `hdiutil` tool with
//! inherited stdio, so its progress output reaches the invoking
//! terminal.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::path::Path;
use tokio::fs::remove_file;
use tokio::process::Command;

const HDIUTIL: &str = "hdiutil";

/// Verifies that hdiutil is available before any image work starts.
pub(crate) fn ensure_hdiutil() -> Result<()> {
    match which::which(HDIUTIL) {
        Ok(path) => {
            log::debug!("Found {} at {}", HDIUTIL, path.display());
            Ok(())
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", HDIUTIL, e);
            Err(Error::ToolNotFound(HDIUTIL.into()))
        }
    }
}

/// Runs hdiutil with the given arguments, forwarding its output.
async fn run_hdiutil(args: &[&str]) -> Result<()> {
    let command = format!("{} {}", HDIUTIL, args.first().copied().unwrap_or_default());

    let status = Command::new(HDIUTIL)
        .args(args)
        .status()
        .await
        .map_err(|error| Error::CommandFailed {
            command: command.clone(),
            error,
        })?;

    if !status.success() {
        return Err(Error::CommandStatus { command, status });
    }
    Ok(())
}

fn utf8_path<'a>(path: &'a Path, what: &'static str) -> Result<&'a str> {
    path.to_str().ok_or_else(|| {
        Error::GenericError(format!(
            "{what} contains non-UTF8 characters: {}",
            path.display()
        ))
    })
}

/// Builds a writable, uncompressed image from the staging directory.
///
/// Overwrites any existing file at the image path.
pub(crate) async fn create_writable(src: &Path, image: &Path, volume_name: &str) -> Result<()> {
    log::info!("Creating writable DMG...");
    let src_str = utf8_path(src, "staging path")?;
    let image_str = utf8_path(image, "image path")?;

    run_hdiutil(&[
        "create",
        "-volname",
        volume_name,
        "-srcfolder",
        src_str,
        "-ov", // Overwrite if exists
        "-format",
        "UDRW",
        image_str,
    ])
    .await?;

    log::info!("✓ Created writable DMG: {}", image.display());
    Ok(())
}

/// Attaches the writable image, makes sure the `Applications` shortcut
/// is present exactly once, and detaches again.
///
/// hdiutil usually carries the shortcut over from the staging area; an
/// lstat check keeps the step idempotent, and a link that is already
/// present (even a dangling one) is never recreated.
pub(crate) async fn verify_applications_link(image: &Path) -> Result<()> {
    log::info!("Mounting DMG...");
    let image_str = utf8_path(image, "image path")?;

    let mount_dir = tempfile::Builder::new()
        .prefix("dmgpack-mount")
        .tempdir()
        .fs_context("creating mount point", std::env::temp_dir())?;
    let mount_str = utf8_path(mount_dir.path(), "mount point")?;

    run_hdiutil(&["attach", image_str, "-mountpoint", mount_str, "-owners", "on"]).await?;

    let link = mount_dir.path().join("Applications");
    match std::fs::symlink_metadata(&link) {
        Ok(_) => log::debug!("Applications link already present in mounted image, skipping"),
        Err(_) => {
            #[cfg(unix)]
            if let Err(error) =
                crate::bundler::utils::fs::symlink_dir(Path::new("/Applications"), &link)
            {
                // Leave no dangling mount behind.
                let _ = Command::new(HDIUTIL)
                    .args(["detach", mount_str])
                    .status()
                    .await;
                return Err(Error::Fs {
                    context: "creating Applications symlink in mounted image",
                    path: link,
                    error,
                });
            }
        }
    }

    log::info!("Unmounting DMG...");
    run_hdiutil(&["detach", mount_str]).await?;
    Ok(())
}

/// Converts the writable image into the compressed distributable at the
/// output path, then deletes the writable image.
pub(crate) async fn convert_to_compressed(writable: &Path, output: &Path) -> Result<()> {
    log::info!("Converting DMG to compressed format...");
    let writable_str = utf8_path(writable, "image path")?;
    let output_str = utf8_path(output, "output path")?;

    // hdiutil convert refuses to replace an existing file.
    if output.exists() {
        remove_file(output)
            .await
            .fs_context("removing previous DMG", output)?;
    }

    run_hdiutil(&["convert", writable_str, "-format", "UDZO", "-o", output_str]).await?;

    log::debug!("Deleting writable DMG...");
    remove_file(writable)
        .await
        .fs_context("removing writable DMG", writable)?;

    log::info!("✓ DMG converted to compressed UDZO format");
    Ok(())
}
