//! File system helpers for staging.

use crate::bail;
use crate::bundler::error::Result;
use std::io;
use std::path::Path;
use tokio::fs;

/// Makes a symbolic link to a directory.
#[cfg(unix)]
pub(crate) fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
pub(crate) fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

/// Recursively copies a directory, creating any parent directories of
/// the destination as necessary.
///
/// Symlinks are re-created with their original targets rather than
/// followed; application bundles rely on internal symlinks.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        bail!("{:?} does not exist", from);
    }
    if !from.is_dir() {
        bail!("{:?} is not a directory", from);
    }
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).await?;
    }

    for entry in walkdir::WalkDir::new(from) {
        let entry = entry?;
        let dest = to.join(entry.path().strip_prefix(from)?);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&dest).await?;
        } else if file_type.is_symlink() {
            let target = fs::read_link(entry.path()).await?;
            if entry.path().is_dir() {
                symlink_dir(&target, &dest)?;
            } else {
                symlink_file(&target, &dest)?;
            }
        } else {
            fs::copy(entry.path(), &dest).await?;
        }
    }

    Ok(())
}
