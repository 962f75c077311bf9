//! # slash-terminal
//!
//! Line-oriented front end for the Slash discount calculator.
//!
//! ## Module Organization
//! ```text
//! slash_terminal/
//! ├── lib.rs          ◄─── You are here (startup & read loop)
//! ├── config.rs       ◄─── File / environment configuration
//! ├── command.rs      ◄─── Line → Command parsing
//! ├── session.rs      ◄─── Command → FormAction, rendering
//! └── error.rs        ◄─── AppError / CommandError
//! ```
//!
//! All arithmetic happens in `slash-core`. This crate only moves strings
//! in and out.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use slash_core::CalculatorState;

use command::Command;
use config::AppConfig;
use error::AppResult;
use session::{Flow, Session};

/// Runs the read loop on stdin until `quit` or end of input.
///
/// ## Startup Sequence
/// 1. Build the initial form from config (currency, keypad decimals)
/// 2. Print the banner
/// 3. Read lines, execute commands, render
pub async fn run(config: AppConfig) -> AppResult<()> {
    let state = CalculatorState::new(config.currency(), config.keypad.percent_max_decimals);
    let mut session = Session::new(state, config.calculating_delay());

    info!(
        currency = %session.state().currency,
        delay_ms = config.ui.calculating_delay_ms,
        "Session started"
    );

    let mut stdout = std::io::stdout();
    writeln!(stdout, "Discount Calculator. Type 'help' for commands.")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                debug!(%line, error = %e, "Rejected input line");
                writeln!(stdout, "{e}")?;
                continue;
            }
        };

        if session.execute(command, &mut stdout).await? == Flow::Quit {
            break;
        }
        stdout.flush()?;
    }

    info!("Session ended");
    Ok(())
}

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initializes tracing (logging) on stderr so stdout stays clean.
///
/// Default: [`DEFAULT_LOG_FILTER`], overridable with `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
