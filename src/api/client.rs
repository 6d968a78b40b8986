//! reqwest-backed request executor.

use super::{ApiResponseError, RequestError, RequestExecutor, RequestOptions};
use crate::config::PlatformConfig;
use crate::error::{ConfigError, Result};
use serde_json::Value;

/// Header carrying the deploy key
pub const DEPLOY_KEY_HEADER: &str = "X-Deploy-Key";

/// HTTP client for the platform API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: PlatformConfig,
}

impl ApiClient {
    /// Create a client for the configured API root
    pub fn new(config: PlatformConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("platform-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self { client, config })
    }
}

impl RequestExecutor for ApiClient {
    async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> std::result::Result<Value, RequestError> {
        let url = self
            .config
            .url_for(path)
            .map_err(|source| RequestError::InvalidPath {
                path: path.to_string(),
                source,
            })?;

        let mut builder = self.client.request(options.method.clone(), url.clone());

        if options.require_auth {
            let key = self
                .config
                .deploy_key
                .as_deref()
                .ok_or_else(|| RequestError::MissingCredentials {
                    path: path.to_string(),
                })?;
            builder = builder.header(DEPLOY_KEY_HEADER, key);
        }

        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        log::debug!("{} {}", options.method, url);

        let network = |source: reqwest::Error| RequestError::Network {
            url: url.to_string(),
            source,
        };

        let response = builder.send().await.map_err(network)?;
        let status = response.status();
        let text = response.text().await.map_err(network)?;

        log::debug!("{} {} -> {}", options.method, url, status);

        if !status.is_success() {
            return Err(ApiResponseError::from_body(url.as_str(), status.as_u16(), &text).into());
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                log::debug!("Non-JSON body from {url} ({e}), keeping it as text");
                Ok(Value::String(text))
            }
        }
    }
}
