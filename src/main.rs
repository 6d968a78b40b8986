//! Platform CLI - promote integration versions to production.

use platform_cli::cli;
use platform_cli::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            let output = OutputManager::new();
            output.error(&format!("Fatal error: {e}"));
            process::exit(e.exit_code());
        }
    }
}
