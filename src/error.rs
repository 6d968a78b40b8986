//! Error types for platform_cli operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

use crate::api::RequestError;

/// Result type alias for platform_cli operations
pub type Result<T> = std::result::Result<T, PromoteError>;

/// Exit code used when the user declines a confirmation prompt
pub const EXIT_CANCELLED: i32 = 130;

/// Main error type for all platform_cli operations
#[derive(Error, Debug)]
pub enum PromoteError {
    /// Credential check errors
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Project to app linking errors
    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// The user declined to continue
    #[error("Cancelled promote.")]
    Cancelled,

    /// The service rejected the version's content
    #[error("{message}")]
    Validation {
        /// Fully rendered list of reasons
        message: String,
    },

    /// The service answered with a plain error text
    #[error("{message}")]
    Transport {
        /// Error text exactly as the service sent it
        message: String,
    },

    /// Request failure that matched no known response shape, passed through untouched
    #[error(transparent)]
    Request(#[from] RequestError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Credential check errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// No deploy key configured anywhere
    #[error("No deploy key found. Set PLATFORM_DEPLOY_KEY or add \"deployKey\" to ~/.platformrc")]
    MissingDeployKey,

    /// The service refused the deploy key
    #[error("Deploy key was rejected by the service (HTTP {status})")]
    Rejected {
        /// HTTP status returned by the credential check
        status: u16,
    },

    /// The credential check could not be completed
    #[error("Could not verify credentials: {reason}")]
    CheckFailed {
        /// Reason for the error
        reason: String,
    },
}

/// Linked app errors
#[derive(Error, Debug)]
pub enum LinkError {
    /// No linked-app file in the project directory
    #[error("No linked app found in {}. Link this directory to an app first.", .dir.display())]
    NotLinked {
        /// Project directory that was searched
        dir: PathBuf,
    },

    /// Linked-app file exists but cannot be used
    #[error("Linked app file {} is malformed: {reason}", .path.display())]
    Malformed {
        /// Path to the linked-app file
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// App lookup returned something other than an app record
    #[error("Unexpected app record for app {id}: {reason}")]
    UnexpectedRecord {
        /// App id that was requested
        id: String,
        /// Reason for the error
        reason: String,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// API endpoint is not a usable URL
    #[error("Invalid API endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Endpoint as configured
        endpoint: String,
        /// Reason for the error
        reason: String,
    },

    /// Credentials file could not be read or parsed
    #[error("Failed to load credentials file {}: {reason}", .path.display())]
    CredentialsFile {
        /// Path to the credentials file
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {reason}")]
    HttpClient {
        /// Reason for the error
        reason: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl PromoteError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PromoteError::Auth(AuthError::MissingDeployKey) => vec![
                "Export PLATFORM_DEPLOY_KEY with a deploy key from your developer settings"
                    .to_string(),
                "Or store it as {\"deployKey\": \"...\"} in ~/.platformrc".to_string(),
            ],
            PromoteError::Auth(AuthError::Rejected { .. }) => vec![
                "Check that the deploy key has not been revoked".to_string(),
                "Generate a new deploy key and update your configuration".to_string(),
            ],
            PromoteError::Link(LinkError::NotLinked { .. }) => vec![
                "Run this command from the directory containing .platformapprc".to_string(),
                "Or pass --project-dir pointing at the linked project".to_string(),
            ],
            PromoteError::Config(ConfigError::InvalidEndpoint { .. }) => vec![
                "Fix PLATFORM_BASE_ENDPOINT or unset it to use the default".to_string(),
            ],
            PromoteError::Validation { .. } => vec![
                "Fix the issues listed above, push a new version and promote it".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// Whether this error is the user declining to continue
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PromoteError::Cancelled)
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_cancelled() { EXIT_CANCELLED } else { 1 }
    }
}
