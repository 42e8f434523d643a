//! Library-level tests for staging assembly and pipeline validation.

use dmgpack::bundler::{Error, Packager, SettingsBuilder, StagingArea};
use std::path::{Path, PathBuf};

/// Builds a minimal .app-shaped fixture under `root`.
fn make_bundle(root: &Path) -> PathBuf {
    let bundle = root.join("MyApp.app");
    std::fs::create_dir_all(bundle.join("Contents/MacOS")).expect("bundle dirs");
    std::fs::write(bundle.join("Contents/Info.plist"), "<plist/>").expect("plist");
    std::fs::write(bundle.join("Contents/MacOS/MyApp"), "#!binary").expect("binary");
    bundle
}

#[tokio::test]
async fn missing_bundle_aborts_before_any_work() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = SettingsBuilder::new()
        .bundle_path(dir.path().join("Missing.app"))
        .output_path(dir.path().join("Output.dmg"))
        .build()
        .expect("valid settings");
    let writable = settings.writable_image_path();

    let err = Packager::new(settings)
        .run()
        .await
        .expect_err("missing bundle");

    assert!(matches!(err, Error::BundleNotFound(_)));
    assert!(!writable.exists());
}

#[tokio::test]
async fn staging_holds_bundle_copy_and_shortcut() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bundle = make_bundle(dir.path());

    let staging = StagingArea::assemble(&bundle).await.expect("staging");

    let staged_app = staging.path().join("MyApp.app");
    assert!(staged_app.join("Contents/Info.plist").is_file());
    assert!(staged_app.join("Contents/MacOS/MyApp").is_file());

    #[cfg(unix)]
    {
        let link = staging.path().join("Applications");
        let metadata = std::fs::symlink_metadata(&link).expect("link exists");
        assert!(metadata.file_type().is_symlink());
        assert_eq!(
            std::fs::read_link(&link).expect("link target"),
            Path::new("/Applications")
        );
    }
}

#[tokio::test]
async fn staging_normalizes_dotted_bundle_paths() {
    // The bundle is copied under its original base name even when the
    // caller hands over a path with parent-dir components.
    let dir = tempfile::tempdir().expect("tempdir");
    make_bundle(dir.path());
    std::fs::create_dir(dir.path().join("sub")).expect("sub dir");

    let dotted = dir.path().join("sub/../MyApp.app");
    let staging = StagingArea::assemble(&dotted).await.expect("staging");
    assert!(staging.path().join("MyApp.app/Contents/Info.plist").is_file());
}

#[tokio::test]
async fn staging_directory_is_removed_on_drop() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bundle = make_bundle(dir.path());

    let staging = StagingArea::assemble(&bundle).await.expect("staging");
    let staging_path = staging.path().to_path_buf();
    assert!(staging_path.exists());

    drop(staging);
    assert!(!staging_path.exists());
}
