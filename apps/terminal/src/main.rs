//! # Slash Terminal Entry Point
//!
//! ## Usage
//! ```text
//! slash [--config <path>]
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (file → environment → defaults)
//! 3. Hand over to the read loop

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::error;

use slash_terminal::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    slash_terminal::init_tracing();

    let config = AppConfig::load_or_default(config_path_from_args());

    match slash_terminal::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Terminal session failed");
            ExitCode::FAILURE
        }
    }
}

/// Reads `--config <path>` (or `--config=<path>`) from the command line.
fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    None
}
