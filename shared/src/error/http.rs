//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::PropertyNotFound | Self::LotNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists => StatusCode::CONFLICT,

            // Well-formed body that does not fit the model
            Self::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,

            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
