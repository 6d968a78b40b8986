//! Failures reported by the request executor.

use serde_json::Value;
use thiserror::Error;

/// A request that did not produce a 2xx answer
#[derive(Error, Debug)]
pub enum RequestError {
    /// Authentication was required but no deploy key is configured
    #[error("No deploy key configured for authenticated request to {path}")]
    MissingCredentials {
        /// API path that was requested
        path: String,
    },

    /// The API path could not be joined onto the configured root
    #[error("Invalid request path {path}: {source}")]
    InvalidPath {
        /// API path that was requested
        path: String,
        /// Join failure
        #[source]
        source: url::ParseError,
    },

    /// The request never got an HTTP answer
    #[error("Request to {url} failed: {source}")]
    Network {
        /// Full request URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status
    #[error(transparent)]
    Response(#[from] ApiResponseError),
}

/// Non-2xx answer from the service, body kept for classification
#[derive(Error, Debug, Clone, PartialEq)]
#[error("`{url}` returned `{status}`{}", describe(.err_text))]
pub struct ApiResponseError {
    /// Full request URL
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Parsed body, when the body was JSON
    pub json: Option<Value>,
    /// Plain error text carried by the body, if any
    pub err_text: Option<String>,
}

fn describe(err_text: &Option<String>) -> String {
    match err_text {
        Some(text) => format!(" saying: {text}"),
        None => String::new(),
    }
}

impl ApiResponseError {
    /// Build from a status and raw body text.
    ///
    /// `err_text` is the `detail` or `message` string of a JSON body, or the whole
    /// body when it is non-empty and not JSON.
    pub fn from_body(url: impl Into<String>, status: u16, body: &str) -> Self {
        let trimmed = body.trim();
        let json: Option<Value> = if trimmed.is_empty() {
            None
        } else {
            serde_json::from_str(trimmed).ok()
        };

        let err_text = match &json {
            Some(value) => ["detail", "message"]
                .iter()
                .find_map(|key| value.get(*key).and_then(Value::as_str))
                .filter(|text| !text.is_empty())
                .map(str::to_string),
            None if !trimmed.is_empty() => Some(trimmed.to_string()),
            None => None,
        };

        Self {
            url: url.into(),
            status,
            json,
            err_text,
        }
    }

    /// `json.activationInfo.url`, when present and a non-empty string
    pub fn activation_url(&self) -> Option<&str> {
        self.json
            .as_ref()?
            .get("activationInfo")?
            .get("url")?
            .as_str()
            .filter(|url| !url.is_empty())
    }

    /// `json.errors`, when present, a sequence, and non-empty
    pub fn errors(&self) -> Option<&[Value]> {
        self.json
            .as_ref()?
            .get("errors")?
            .as_array()
            .map(Vec::as_slice)
            .filter(|errors| !errors.is_empty())
    }
}
