//! Application error type and its HTTP mapping.
//!
//! Every failure surfaces as an [`AppError`] with a distinguishing kind, a
//! human-readable message and a JSON `details` payload. Handlers return it
//! directly; [`IntoResponse`] turns it into a status code plus a JSON body:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short URL not found", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input, including an invalid original URL.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// A caller-chosen short code is already taken.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Unknown or inactive short code.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The link exists but its expiration time has passed.
    #[error("{message}")]
    Expired { message: String, details: Value },

    /// The store rejected an insert because the short code already exists.
    #[error("{message}")]
    DuplicateCode { message: String, details: Value },

    /// Code generation gave up after too many collisions.
    #[error("{message}")]
    Exhausted { message: String, details: Value },

    /// The underlying store failed.
    #[error("{message}")]
    Storage { message: String, details: Value },

    /// A failure outside the store, such as QR rendering.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }

    pub fn duplicate_code(code: &str) -> Self {
        Self::DuplicateCode {
            message: "Short code already exists".to_string(),
            details: json!({ "code": code }),
        }
    }

    pub fn exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::Exhausted {
            message: message.into(),
            details,
        }
    }

    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable kind, also used as the `code` field of the body.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::Conflict { .. } => "code_conflict",
            AppError::NotFound { .. } => "not_found",
            AppError::Expired { .. } => "expired",
            AppError::DuplicateCode { .. } => "duplicate_code",
            AppError::Exhausted { .. } => "code_space_exhausted",
            AppError::Storage { .. } => "storage_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Conflict { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Expired { .. } => StatusCode::GONE,
            AppError::DuplicateCode { .. } => StatusCode::CONFLICT,
            AppError::Exhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Storage { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::Conflict { message, details }
            | AppError::NotFound { message, details }
            | AppError::Expired { message, details }
            | AppError::DuplicateCode { message, details }
            | AppError::Exhausted { message, details }
            | AppError::Storage { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.kind(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::DuplicateCode {
                message: "Unique constraint violation".to_string(),
                details: json!({ "constraint": db.constraint() }),
            };
        }

        tracing::error!(error = %e, "Database error");
        AppError::storage("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(e.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::conflict("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::expired("x", json!({})).status_code(),
            StatusCode::GONE
        );
        assert_eq!(
            AppError::exhausted("x", json!({})).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::storage("x", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Short URL not found", json!({ "code": "abc" }));
        assert_eq!(err.to_string(), "Short URL not found");
    }

    #[test]
    fn test_error_info_carries_kind_and_details() {
        let info = AppError::duplicate_code("abc123").to_error_info();
        assert_eq!(info.code, "duplicate_code");
        assert_eq!(info.details["code"], "abc123");
    }

    #[test]
    fn test_internal_error_is_not_a_storage_error() {
        let err = AppError::internal("Failed to render QR code", json!({}));
        assert_eq!(err.kind(), "internal_error");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_row_not_found_maps_to_storage() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Storage { .. }));
    }
}
