//! Command execution with error reporting and exit codes.

mod promote;

use crate::cli::{Args, Command, OutputManager, TerminalConsole};
use crate::error::Result;

use promote::execute_promote;

/// Execute the command selected by the parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    let output = OutputManager::new();

    if let Err(validation_error) = args.validate() {
        output.error(&format!("Invalid arguments: {}", validation_error));
        return Ok(1);
    }

    let console = TerminalConsole::new(output);

    let result = match &args.command {
        Command::Promote { version } => execute_promote(&args, version, &console).await,
    };

    match result {
        Ok(()) => Ok(0),
        Err(e) if e.is_cancelled() => {
            let _ = console.output().warn(&e.to_string());
            Ok(e.exit_code())
        }
        Err(e) => {
            log::debug!("Command '{}' failed: {:?}", args.command.name(), e);
            console.output().error(&e.to_string());

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                let _ = console.output().println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    let _ = console.output().indent(&format!("• {}", suggestion));
                }
            }

            Ok(e.exit_code())
        }
    }
}
