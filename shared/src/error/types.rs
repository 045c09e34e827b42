//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a generic not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Property `id` does not exist
    pub fn property_not_found(id: impl Into<String>) -> Self {
        Self::new(ErrorCode::PropertyNotFound).with_detail("id", id.into())
    }

    /// Lot development `id` does not exist
    pub fn lot_not_found(id: impl Into<String>) -> Self {
        Self::new(ErrorCode::LotNotFound).with_detail("id", id.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an already exists error
    pub fn already_exists(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::AlreadyExists, format!("{} already exists", r))
            .with_detail("resource", r)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// JSON body rejections keep the `{code, message}` body
///
/// - body does not fit the model → `ValidationFailed` (422)
/// - malformed JSON or wrong content type → `InvalidRequest` (400)
/// - body could not be read → `InternalError` (500)
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        use axum::extract::rejection::JsonRejection;

        match rejection {
            JsonRejection::JsonDataError(e) => Self::validation(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => Self::invalid_request(e.body_text()),
            JsonRejection::MissingJsonContentType(e) => Self::invalid_request(e.body_text()),
            other => Self::internal(other.body_text()),
        }
    }
}

/// JSON error body: `{ "code": 6001, "message": "...", "details": {...} }`
///
/// Successful catalog responses return the resource itself, not an envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Numeric error code
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

impl From<AppError> for ApiResponse {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message,
            details: err.details,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::error(&self);

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("field", "ti")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "ti");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_catalog_not_found_constructors() {
        let err = AppError::property_not_found("p42");
        assert_eq!(err.code, ErrorCode::PropertyNotFound);
        assert_eq!(err.message, "Property not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.details.unwrap().get("id").unwrap(), "p42");

        let err = AppError::lot_not_found("lot9");
        assert_eq!(err.code, ErrorCode::LotNotFound);
        assert_eq!(err.message, "Lot not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::NotFound, "Lot not found");
        assert_eq!(format!("{}", err), "Lot not found");
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::property_not_found("p1");
        let response = ApiResponse::error(&err);

        assert_eq!(response.code, 6001);
        assert_eq!(response.message, "Property not found");
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_from_error() {
        let response: ApiResponse = AppError::internal("Internal server error").into();
        assert_eq!(response.code, 9001);
        assert_eq!(response.message, "Internal server error");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_api_response_serialize() {
        let err = AppError::lot_not_found("lot9");
        let json = serde_json::to_value(ApiResponse::error(&err)).unwrap();
        assert_eq!(json["code"], 6101);
        assert_eq!(json["message"], "Lot not found");
        assert_eq!(json["details"]["id"], "lot9");

        let json = serde_json::to_value(ApiResponse::error(&AppError::database("boom"))).unwrap();
        assert!(json.get("details").is_none());
    }
}
