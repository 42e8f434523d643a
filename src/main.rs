//! dmgpack - drag-to-install DMG packaging for macOS application bundles.
//!
//! Thin binary wrapper: initializes logging, runs the CLI, and reports
//! the first pipeline failure as a single diagnostic.

use dmgpack::cli;
use dmgpack::cli::OutputManager;

#[tokio::main]
async fn main() {
    // Step progress is logged at info level; show it unless RUST_LOG
    // says otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = cli::run().await {
        // Failures print one diagnostic and terminate normally; there
        // are no distinct exit codes per failure type.
        let output = OutputManager::new(false);
        output.error(&format!("Error: {e}"));
    }
}
