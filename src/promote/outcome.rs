//! Classification of the promotion call's result.

use super::issues::ValidationErrors;
use crate::api::RequestError;
use serde_json::Value;

/// What happened to one promotion request
#[derive(Debug)]
pub enum PromotionOutcome {
    /// The version is now the production version
    Success,
    /// The version passed validation but the app still needs public activation
    PendingActivation {
        /// Where the developer requests activation
        activation_url: String,
    },
    /// The service rejected the version's content
    ValidationFailure {
        /// Reasons reported by the service
        errors: ValidationErrors,
    },
    /// The service answered with a plain error text
    TransportFailure {
        /// Error text exactly as sent
        message: String,
    },
    /// A failure with no recognizable shape, kept intact
    Unrecognized(RequestError),
}

impl PromotionOutcome {
    /// Decode the request result.
    ///
    /// Checks run in a fixed order: activation URL, then `errors`, then error text.
    /// An activation URL wins even when `errors` is also present.
    pub fn from_result(result: Result<Value, RequestError>) -> Self {
        let error = match result {
            Ok(_) => return PromotionOutcome::Success,
            Err(error) => error,
        };

        let RequestError::Response(response) = &error else {
            return PromotionOutcome::Unrecognized(error);
        };

        if let Some(url) = response.activation_url() {
            return PromotionOutcome::PendingActivation {
                activation_url: url.to_string(),
            };
        }

        if let Some(errors) = response.errors() {
            return PromotionOutcome::ValidationFailure {
                errors: ValidationErrors::from_values(errors),
            };
        }

        if let Some(message) = &response.err_text {
            return PromotionOutcome::TransportFailure {
                message: message.clone(),
            };
        }

        PromotionOutcome::Unrecognized(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiResponseError;
    use serde_json::json;

    fn rejected(json: Option<Value>, err_text: Option<&str>) -> Result<Value, RequestError> {
        Err(RequestError::Response(ApiResponseError {
            url: "https://platform.example.com/apps/1/versions/1.0.0/promote/production"
                .to_string(),
            status: 400,
            json,
            err_text: err_text.map(str::to_string),
        }))
    }

    #[test]
    fn test_success() {
        assert!(matches!(
            PromotionOutcome::from_result(Ok(Value::Null)),
            PromotionOutcome::Success
        ));
    }

    #[test]
    fn test_activation_url_wins_over_errors() {
        let outcome = PromotionOutcome::from_result(rejected(
            Some(json!({"activationInfo": {"url": "https://x"}, "errors": ["bad thing"]})),
            Some("also text"),
        ));
        match outcome {
            PromotionOutcome::PendingActivation { activation_url } => {
                assert_eq!(activation_url, "https://x")
            }
            other => panic!("expected pending activation, got {other:?}"),
        }
    }

    #[test]
    fn test_errors_before_text() {
        let outcome =
            PromotionOutcome::from_result(rejected(Some(json!({"errors": ["bad thing"]})), Some("x")));
        assert!(matches!(
            outcome,
            PromotionOutcome::ValidationFailure {
                errors: ValidationErrors::Messages(_)
            }
        ));
    }

    #[test]
    fn test_empty_errors_fall_through_to_text() {
        let outcome =
            PromotionOutcome::from_result(rejected(Some(json!({"errors": []})), Some("oops")));
        match outcome {
            PromotionOutcome::TransportFailure { message } => assert_eq!(message, "oops"),
            other => panic!("expected transport failure, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_keeps_original() {
        let outcome = PromotionOutcome::from_result(rejected(Some(json!({"weird": true})), None));
        match outcome {
            PromotionOutcome::Unrecognized(RequestError::Response(response)) => {
                assert_eq!(response.status, 400);
                assert_eq!(response.json, Some(json!({"weird": true})));
            }
            other => panic!("expected unrecognized, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_credentials_is_unrecognized() {
        let outcome = PromotionOutcome::from_result(Err(RequestError::MissingCredentials {
            path: "/apps/1".to_string(),
        }));
        assert!(matches!(
            outcome,
            PromotionOutcome::Unrecognized(RequestError::MissingCredentials { .. })
        ));
    }
}
