//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Points API                         │
//! │                                                                         │
//! │  Handler                                                                │
//! │  Result<Json<T>, ApiError>                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  JSON decode failed? ─────────────── INVALID_RECEIPT    400            │
//! │  ServiceError::Validation ────────── INVALID_RECEIPT    400            │
//! │  ServiceError::NotFound ──────────── NOT_FOUND          404            │
//! │  ServiceError::Computation ───────── INCONSISTENT_DATA  409            │
//! │  Body over the limit ─────────────── PAYLOAD_TOO_LARGE  413            │
//! │  ServiceError::Store ─────────────── INTERNAL           500            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Clients only ever see the fixed descriptions below. The underlying cause
//! is logged, not returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::service::ServiceError;

pub const INVALID_RECEIPT_DESCRIPTION: &str = "The receipt is invalid";
pub const NOT_FOUND_DESCRIPTION: &str = "No receipt found for that id";
pub const INCONSISTENT_DATA_DESCRIPTION: &str = "Inconsistency";

/// Error body returned by every failing endpoint.
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "description": "No receipt found for that id"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable description
    pub description: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Undecodable or invalid receipt (400)
    InvalidReceipt,

    /// Unknown receipt id (404)
    NotFound,

    /// Stored receipt could not be scored (409)
    InconsistentData,

    /// Request body over the configured limit (413)
    PayloadTooLarge,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::InvalidReceipt => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InconsistentData => StatusCode::CONFLICT,
            ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, description: impl Into<String>) -> Self {
        ApiError {
            code,
            description: description.into(),
        }
    }

    pub fn invalid_receipt() -> Self {
        ApiError::new(ErrorCode::InvalidReceipt, INVALID_RECEIPT_DESCRIPTION)
    }

    pub fn not_found() -> Self {
        ApiError::new(ErrorCode::NotFound, NOT_FOUND_DESCRIPTION)
    }

    pub fn inconsistent_data() -> Self {
        ApiError::new(ErrorCode::InconsistentData, INCONSISTENT_DATA_DESCRIPTION)
    }

    pub fn payload_too_large() -> Self {
        ApiError::new(ErrorCode::PayloadTooLarge, "The request body is too large")
    }

    pub fn internal() -> Self {
        ApiError::new(ErrorCode::Internal, "Internal server error")
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Converts service errors to API errors.
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(_) => ApiError::invalid_receipt(),
            ServiceError::NotFound { .. } => ApiError::not_found(),
            ServiceError::Computation { .. } => ApiError::inconsistent_data(),
            ServiceError::Store(e) => {
                // Log the actual error but return a generic message
                tracing::error!(error = %e, "Receipt store failure");
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.description)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use points_core::{ComputationError, ValidationError};
    use points_store::StoreError;

    #[test]
    fn test_service_error_mapping() {
        let cases = [
            (
                ServiceError::Validation(ValidationError::Required {
                    field: "items".to_string(),
                }),
                StatusCode::BAD_REQUEST,
                INVALID_RECEIPT_DESCRIPTION,
            ),
            (
                ServiceError::NotFound {
                    id: "abc".to_string(),
                },
                StatusCode::NOT_FOUND,
                NOT_FOUND_DESCRIPTION,
            ),
            (
                ServiceError::Computation {
                    id: "abc".to_string(),
                    source: ComputationError::Overflow,
                },
                StatusCode::CONFLICT,
                INCONSISTENT_DATA_DESCRIPTION,
            ),
            (
                ServiceError::Store(StoreError::LockPoisoned),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ),
        ];

        for (service_error, status, description) in cases {
            let api_error = ApiError::from(service_error);
            assert_eq!(api_error.status(), status);
            assert_eq!(api_error.description, description);
        }
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "NOT_FOUND",
                "description": "No receipt found for that id"
            })
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::inconsistent_data().into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
