//! Binary-level tests for the dmgpack CLI.
//!
//! The full hdiutil pipeline needs macOS with disk-image privileges;
//! these tests cover the argument surface and the failure paths that
//! run before any image work starts.

use assert_cmd::Command;
use predicates::prelude::*;

fn dmgpack() -> Command {
    Command::cargo_bin("dmgpack").expect("binary builds")
}

#[test]
fn prints_usage_without_arguments() {
    dmgpack()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn prints_usage_with_missing_output() {
    dmgpack()
        .arg("MyApp.app")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn reports_missing_bundle_without_creating_anything() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("Output.dmg");

    dmgpack()
        .arg(dir.path().join("Missing.app"))
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("not found")));

    assert!(!output.exists());
    assert!(!dir.path().join("Output_temp.dmg").exists());
}

#[test]
fn reports_missing_hdiutil() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bundle = dir.path().join("MyApp.app");
    std::fs::create_dir(&bundle).expect("bundle dir");

    // An emptied PATH makes the preflight fail on every platform.
    dmgpack()
        .env("PATH", "")
        .arg(&bundle)
        .arg(dir.path().join("Output.dmg"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("hdiutil")));

    assert!(!dir.path().join("Output_temp.dmg").exists());
    assert!(!dir.path().join("Output.dmg").exists());
}

#[test]
fn rejects_output_path_without_file_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bundle = dir.path().join("MyApp.app");
    std::fs::create_dir(&bundle).expect("bundle dir");

    dmgpack()
        .arg(&bundle)
        .arg("/")
        .assert()
        .success()
        .stderr(predicate::str::contains("does not name a file"));
}
