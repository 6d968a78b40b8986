//! Command line argument parsing and validation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage integration versions on the platform
#[derive(Parser, Debug)]
#[command(
    name = "platform",
    version,
    about = "Manage integration versions on the platform",
    long_about = "Manage integration versions on the platform.

Usage:
  platform promote 1.0.1
  platform --project-dir ../my-app promote 2.0.0"
)]
pub struct Args {
    /// Project directory linked to the app (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Promote a pushed version to production, the version new users receive.
    ///
    /// Shows the version's CHANGELOG entry and asks for confirmation first.
    /// Existing users stay on their version; move them with `platform migrate`.
    Promote {
        /// Version to promote, e.g. 1.0.1
        #[arg(value_name = "VERSION")]
        version: String,
    },
}

impl Command {
    /// Command name for messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::Promote { .. } => "promote",
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Promote { version } if version.trim().is_empty() => {
                Err("Version to promote must not be empty".to_string())
            }
            Command::Promote { .. } => Ok(()),
        }
    }

    /// Project directory, falling back to the current directory
    pub fn project_dir(&self) -> std::io::Result<PathBuf> {
        match &self.project_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}
