//! Authenticated access to the platform API.
//!
//! The promotion workflow only talks to the service through [`RequestExecutor`],
//! so tests can drive it with an in-memory executor.

mod client;
mod error;

pub use client::ApiClient;
pub use error::{ApiResponseError, RequestError};

use reqwest::Method;
use serde_json::Value;

/// Method, body and auth requirement of a single API call
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method
    pub method: Method,
    /// JSON body, sent only when present
    pub body: Option<Value>,
    /// Attach the deploy key
    pub require_auth: bool,
}

impl RequestOptions {
    /// Authenticated GET without a body
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            body: None,
            require_auth: true,
        }
    }

    /// Authenticated PUT with an optional JSON body
    pub fn put(body: Option<Value>) -> Self {
        Self {
            method: Method::PUT,
            body,
            require_auth: true,
        }
    }
}

/// Executes requests against the platform API.
///
/// Implementations resolve `path` against the API root. A 2xx answer yields the
/// decoded JSON body (`Value::Null` when empty); everything else is a [`RequestError`].
#[allow(async_fn_in_trait)]
pub trait RequestExecutor {
    /// Perform one request. Never retries.
    async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> std::result::Result<Value, RequestError>;
}
