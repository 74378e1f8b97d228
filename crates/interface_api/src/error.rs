//! API error handling
//!
//! Business outcomes from the workflow (validation failure, denial,
//! conflict) are mapped to explicit 4xx responses here. Only genuinely
//! unexpected faults reach the `Internal` variant and its 500 body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_contracting::FieldViolation;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Authorization denied")]
    AuthorizationDenied(Option<String>),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed")]
    ValidationFailed(Vec<FieldViolation>),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<FieldViolation>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, violations) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized".to_string(),
                None,
            ),
            ApiError::AuthorizationDenied(reason) => (
                StatusCode::UNAUTHORIZED,
                "authorization_denied",
                reason.unwrap_or_else(|| "Unable to complete the contract.".to_string()),
                None,
            ),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::ValidationFailed(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                "One or more fields are invalid.".to_string(),
                Some(violations),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            violations,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_body_carries_the_violations() {
        let response = ApiError::ValidationFailed(vec![FieldViolation::new(
            "coverage",
            "The coverage must be at least 100000.",
        )])
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn denial_maps_to_unauthorized() {
        let response = ApiError::AuthorizationDenied(None).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
