//! Deploy key verification.

use crate::api::{RequestError, RequestExecutor, RequestOptions};
use crate::error::AuthError;

/// Path of the credential check endpoint
pub const CHECK_PATH: &str = "/check";

/// Verify that the configured deploy key is accepted by the service
pub async fn check_credentials<E: RequestExecutor>(executor: &E) -> Result<(), AuthError> {
    match executor.request(CHECK_PATH, RequestOptions::get()).await {
        Ok(_) => {
            log::debug!("Deploy key accepted");
            Ok(())
        }
        Err(RequestError::MissingCredentials { .. }) => Err(AuthError::MissingDeployKey),
        Err(RequestError::Response(response)) if matches!(response.status, 401 | 403) => {
            Err(AuthError::Rejected {
                status: response.status,
            })
        }
        Err(e) => Err(AuthError::CheckFailed {
            reason: e.to_string(),
        }),
    }
}
