//! Command line interface for dmgpack.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::bundler::{Error, Packager, Result, SettingsBuilder};

/// Main CLI entry point
pub async fn run() -> Result<()> {
    let args = Args::parse_args();

    if let Err(message) = args.validate() {
        return Err(Error::GenericError(message));
    }

    let mut builder = SettingsBuilder::new()
        .bundle_path(args.bundle_path)
        .output_path(args.output_path);
    if let Some(volume_name) = args.volume_name {
        builder = builder.volume_name(volume_name);
    }
    let settings = builder.build()?;

    let volume_name = settings.volume_name().to_string();
    let dmg_path = Packager::new(settings).run().await?;

    let output = OutputManager::new(false);
    let _ = output.success(&format!(
        "DMG created at {} with volume name {}",
        dmg_path.display(),
        volume_name
    ));

    Ok(())
}
