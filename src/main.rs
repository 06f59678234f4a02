//! Contact assistant - main entry point.
//!
//! Wires up logging and configuration, then hands control to the
//! interactive loop in [`contact_assistant::repl`].

use anyhow::Result;
use contact_assistant::{repl, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Configuration first, so its log level can seed the filter.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr only; stdout carries prompts and replies.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.storage_path.display(), "starting contact assistant");

    if let Err(e) = repl::run(&config) {
        error!("assistant terminated with error: {e:#}");
        return Err(e);
    }

    info!("contact assistant shutdown complete");
    Ok(())
}
