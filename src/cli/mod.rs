//! Command line interface for the platform tool.
//!
//! This module provides argument parsing, command execution and user feedback.

mod args;
pub mod commands;
mod console;
mod output;
mod progress;

pub use args::{Args, Command};
pub use commands::execute_command;
pub use console::TerminalConsole;
pub use output::OutputManager;
pub use progress::Spinner;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    init_logging(args.verbose);
    execute_command(args).await
}

/// Install the logger. `RUST_LOG` wins; `--verbose` raises the default to debug.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "platform_cli=debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}
