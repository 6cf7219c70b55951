//! Response types for the wage engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Individual findings, when the error has several.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            errors: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Response body of the `/team-cost/validate` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// True when there are no findings.
    pub valid: bool,
    /// Every validation finding.
    pub errors: Vec<String>,
}

impl From<Vec<String>> for ValidationResponse {
    fn from(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidBaseWage { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_BASE_WAGE",
                    message,
                    "The happiness-adjusted wage cannot be computed until a base wage is entered",
                ),
            },
            EngineError::ZeroWeightSum => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "ZERO_WEIGHT_SUM",
                    message,
                    "At least one category weight must be greater than zero",
                ),
            },
            EngineError::EmptyCategory { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            EngineError::RatingOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("RATING_OUT_OF_RANGE", message),
            },
            EngineError::WeightOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("WEIGHT_OUT_OF_RANGE", message),
            },
            EngineError::ArithmeticOverflow { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "ARITHMETIC_OVERFLOW",
                    message,
                    "An amount in the request is too large to calculate with",
                ),
            },
            EngineError::InvalidTeam { messages } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError {
                    errors: messages,
                    ..ApiError::new("INVALID_TEAM", "Team is not ready to be costed")
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
        assert!(!json.contains("errors"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_base_wage_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidBaseWage {
            wage: Decimal::ZERO,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_BASE_WAGE");
    }

    #[test]
    fn test_arithmetic_overflow_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::ArithmeticOverflow {
            operation: "annual salary",
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "ARITHMETIC_OVERFLOW");
    }

    #[test]
    fn test_error_response_renders_status() {
        let response = ApiErrorResponse::from(EngineError::ZeroWeightSum).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_team_carries_every_message() {
        let api_error: ApiErrorResponse = EngineError::InvalidTeam {
            messages: vec!["a".to_string(), "b".to_string()],
        }
        .into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "INVALID_TEAM");
        assert_eq!(api_error.error.errors, vec!["a", "b"]);
    }

    #[test]
    fn test_validation_response_from_findings() {
        let ok: ValidationResponse = Vec::new().into();
        assert!(ok.valid);

        let bad: ValidationResponse = vec!["no positions configured".to_string()].into();
        assert!(!bad.valid);
        assert_eq!(bad.errors.len(), 1);
    }
}
