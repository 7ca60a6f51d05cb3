//! Assistant bot - main entry point
//!
//! Runs the interactive contact-book session over stdin/stdout.

use anyhow::Result;
use rolodex::{repl, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting assistant bot with a {}-day birthday window",
        config.birthday_window_days
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(&config, stdin.lock(), stdout.lock())?;

    info!("Assistant bot session ended");
    Ok(())
}
