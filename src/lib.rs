//! # Platform CLI
//!
//! Command line tooling for integrations hosted on the platform.
//!
//! The `promote` command marks an already uploaded version as the production
//! version that new users receive. Before promoting it verifies the deploy key,
//! shows the version's changelog entry and asks for confirmation.
//!
//! ## Usage
//!
//! ```bash
//! platform promote 1.0.1                 # Promote version 1.0.1
//! platform --project-dir ../app promote 2.0.0
//! ```
//!
//! ## Outcomes
//!
//! - **Promoted**: the version is now the production version
//! - **Pending activation**: the version passed validation, the app still needs public activation
//! - **Rejected**: validation issues or a service error are reported and the command fails

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod api;
pub mod auth;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod link;
pub mod promote;

// Re-export main types for public API
pub use api::{ApiClient, ApiResponseError, RequestError, RequestExecutor, RequestOptions};
pub use cli::Args;
pub use config::PlatformConfig;
pub use console::{Console, ProgressGuard};
pub use error::{AuthError, CliError, ConfigError, LinkError, PromoteError, Result};
pub use link::{AppContext, AppId};
pub use promote::{PromoteOptions, Promoter, PromotionOutcome, PromotionRequestBody};
