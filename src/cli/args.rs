//! Command line argument parsing and validation.
//!
//! The tool is designed to "just work" - point it at a bundle, it
//! produces the installer image.

use clap::Parser;
use std::path::PathBuf;

/// Package a macOS application bundle into a distributable DMG
#[derive(Parser, Debug)]
#[command(
    name = "dmgpack",
    version,
    about = "Package a macOS application bundle into a distributable DMG",
    long_about = "Stage an application bundle with an Applications shortcut, build a \
disk image from it, verify the shortcut in the mounted image, and convert the result \
to a compressed distributable image.

Usage:
  dmgpack MyApp.app MyApp.dmg
  dmgpack MyApp.app MyApp.dmg \"Cool App\""
)]
pub struct Args {
    /// Path to the application bundle to package
    #[arg(index = 1, value_name = "APP")]
    pub bundle_path: PathBuf,

    /// Destination path for the compressed disk image
    #[arg(index = 2, value_name = "DMG")]
    pub output_path: PathBuf,

    /// Volume name shown when the image is mounted
    #[arg(index = 3, value_name = "VOLUME")]
    pub volume_name: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        // The output must name a file; its extension (if any) is
        // replaced to derive the intermediate image name.
        if self.output_path.file_name().is_none() {
            return Err(format!(
                "output path {} does not name a file",
                self.output_path.display()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_name_is_optional() {
        let args = Args::try_parse_from(["dmgpack", "MyApp.app", "Output.dmg"])
            .expect("two arguments parse");
        assert_eq!(args.bundle_path, PathBuf::from("MyApp.app"));
        assert_eq!(args.output_path, PathBuf::from("Output.dmg"));
        assert!(args.volume_name.is_none());
    }

    #[test]
    fn volume_name_is_accepted() {
        let args = Args::try_parse_from(["dmgpack", "MyApp.app", "Output.dmg", "Cool App"])
            .expect("three arguments parse");
        assert_eq!(args.volume_name.as_deref(), Some("Cool App"));
    }

    #[test]
    fn output_path_is_required() {
        assert!(Args::try_parse_from(["dmgpack", "MyApp.app"]).is_err());
    }

    #[test]
    fn validate_rejects_directory_like_output() {
        let args = Args::try_parse_from(["dmgpack", "MyApp.app", "/"]).expect("parses");
        let message = args.validate().expect_err("no file name");
        assert!(message.contains("does not name a file"));
    }
}
