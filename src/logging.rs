//! Logging setup
//!
//! The TUI owns the terminal, so logs go to a file under /tmp instead of
//! stdout. `RUST_LOG` filters as usual; the default level is info.

use std::fs::OpenOptions;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "/tmp/restdeck.log";

pub fn init() -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(file)
        .with_ansi(false)
        .init();

    Ok(())
}
