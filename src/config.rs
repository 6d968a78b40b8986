//! Runtime configuration for platform API access.
//!
//! Values come from the environment first, then from `~/.platformrc`, then defaults.

use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// API root used when `PLATFORM_BASE_ENDPOINT` is not set
pub const DEFAULT_BASE_ENDPOINT: &str = "https://platform.example.com/api/platform/cli";

/// Environment variable overriding the API root
pub const ENV_BASE_ENDPOINT: &str = "PLATFORM_BASE_ENDPOINT";

/// Environment variable carrying the deploy key
pub const ENV_DEPLOY_KEY: &str = "PLATFORM_DEPLOY_KEY";

/// File name of the per-user credentials file in the home directory
pub const CREDENTIALS_FILE: &str = ".platformrc";

/// Resolved configuration for one invocation
#[derive(Clone)]
pub struct PlatformConfig {
    /// API root, always ending with `/`
    pub base_url: Url,
    /// Deploy key sent with authenticated requests
    pub deploy_key: Option<String>,
    /// Project directory holding the linked-app file and changelog
    pub project_dir: PathBuf,
}

impl fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformConfig")
            .field("base_url", &self.base_url.as_str())
            .field("deploy_key", &self.deploy_key.as_ref().map(|_| "<redacted>"))
            .field("project_dir", &self.project_dir)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct CredentialsFile {
    #[serde(rename = "deployKey")]
    deploy_key: Option<String>,
}

impl PlatformConfig {
    /// Build configuration from the process environment and the user's home directory
    pub fn from_env(project_dir: PathBuf) -> Result<Self> {
        let endpoint = std::env::var(ENV_BASE_ENDPOINT)
            .ok()
            .filter(|value| !value.trim().is_empty());
        let env_key = std::env::var(ENV_DEPLOY_KEY)
            .ok()
            .filter(|value| !value.trim().is_empty());

        let deploy_key = match env_key {
            Some(key) => Some(key),
            None => match dirs::home_dir() {
                Some(home) => load_deploy_key(&home.join(CREDENTIALS_FILE))?,
                None => None,
            },
        };

        Self::new(
            endpoint.as_deref().unwrap_or(DEFAULT_BASE_ENDPOINT),
            deploy_key,
            project_dir,
        )
    }

    /// Build configuration from explicit values
    pub fn new(endpoint: &str, deploy_key: Option<String>, project_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            base_url: parse_endpoint(endpoint)?,
            deploy_key,
            project_dir,
        })
    }

    /// Full URL for an API path such as `/apps/1`
    pub fn url_for(&self, path: &str) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    // Url::join drops the last segment unless the base ends with a slash
    let normalized = format!("{}/", endpoint.trim().trim_end_matches('/'));
    let url = Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())).into());
    }

    Ok(url)
}

/// Read the deploy key from a credentials file. A missing file is not an error.
pub fn load_deploy_key(path: &Path) -> Result<Option<String>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::CredentialsFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into());
        }
    };

    let parsed: CredentialsFile =
        serde_json::from_str(&content).map_err(|e| ConfigError::CredentialsFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    log::debug!("Loaded credentials from {}", path.display());
    Ok(parsed.deploy_key.filter(|key| !key.trim().is_empty()))
}
