//! Promote command implementation.

use crate::api::ApiClient;
use crate::cli::{Args, TerminalConsole};
use crate::config::PlatformConfig;
use crate::error::Result;
use crate::promote::{PromoteOptions, Promoter};

/// Execute promote command
pub(super) async fn execute_promote(
    args: &Args,
    version: &str,
    console: &TerminalConsole,
) -> Result<()> {
    let project_dir = args.project_dir()?;
    let config = PlatformConfig::from_env(project_dir.clone())?;
    log::debug!("Using API root {}", config.base_url);

    let client = ApiClient::new(config)?;
    let promoter = Promoter::new(&client, console, &project_dir, PromoteOptions::default());
    promoter.promote(version).await?;

    Ok(())
}
