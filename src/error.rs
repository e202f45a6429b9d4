use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{violation_messages, FieldViolation};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ResourceNotFound(String),

    #[error("{0}")]
    ResourceFound(String),

    #[error("{message}")]
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body shared by every failure
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub title: String,
    pub detail: String,
    pub developer_message: String,
    pub errors: Vec<String>,
}

impl AppError {
    /// Error for a school that should exist but does not.
    ///
    /// The stored message is always the fixed context prefix followed by the
    /// caller-supplied description.
    pub fn resource_not_found(message: impl AsRef<str>) -> Self {
        Self::ResourceNotFound(format!("Found an issue with School: {}", message.as_ref()))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ResourceNotFound(_) => StatusCode::NOT_FOUND,
            Self::ResourceFound(_) | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Category label reported in the `title` field
    pub fn title(&self) -> &'static str {
        match self {
            Self::ResourceNotFound(_) => "Resource Not Found",
            Self::ResourceFound(_) => "Unexpected Resource",
            Self::Validation { .. } | Self::Database(_) | Self::Internal(_) => {
                "Rest Internal Exception"
            }
        }
    }

    /// Fully-qualified identifier of the concrete variant, for diagnostics only
    pub fn developer_message(&self) -> String {
        let variant = match self {
            Self::ResourceNotFound(_) => "ResourceNotFound",
            Self::ResourceFound(_) => "ResourceFound",
            Self::Validation { .. } => "Validation",
            Self::Database(_) => "Database",
            Self::Internal(_) => "Internal",
        };
        format!("{}::{}", std::any::type_name::<Self>(), variant)
    }

    /// Build the response payload describing this error
    pub fn to_error_detail(&self) -> ErrorDetail {
        ErrorDetail {
            timestamp: Utc::now(),
            status: self.status_code().as_u16(),
            title: self.title().to_string(),
            detail: self.to_string(),
            developer_message: self.developer_message(),
            errors: violation_messages(self),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        let error_detail = self.to_error_detail();

        (status, Json(error_detail)).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_not_found_prefixes_message() {
        let err = AppError::resource_not_found("id 5 not found");
        assert_eq!(
            err.to_string(),
            "Found an issue with School: id 5 not found"
        );
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.title(), "Resource Not Found");
    }

    #[test]
    fn test_resource_found_maps_to_bad_request() {
        let err = AppError::ResourceFound("name already exists".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.title(), "Unexpected Resource");
        assert_eq!(err.to_string(), "name already exists");
    }

    #[test]
    fn test_generic_errors_use_internal_title() {
        let err = AppError::Internal("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.title(), "Rest Internal Exception");
        assert_eq!(err.to_string(), "Internal server error: boom");
    }

    #[test]
    fn test_validation_uses_internal_title_with_bad_request() {
        let err = AppError::Validation {
            message: "Invalid school payload".to_string(),
            violations: vec![FieldViolation::new("name", "must not be blank")],
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.title(), "Rest Internal Exception");
    }

    #[test]
    fn test_developer_message_names_the_variant() {
        let err = AppError::resource_not_found("id 5 not found");
        assert!(err
            .developer_message()
            .ends_with("error::AppError::ResourceNotFound"));

        let err = AppError::Internal("boom".to_string());
        assert!(err.developer_message().ends_with("error::AppError::Internal"));
    }

    #[test]
    fn test_error_detail_status_matches_selected_code() {
        let errors = [
            AppError::resource_not_found("id 5 not found"),
            AppError::ResourceFound("name already exists".to_string()),
            AppError::Internal("boom".to_string()),
        ];

        for err in errors {
            let detail = err.to_error_detail();
            assert_eq!(detail.status, err.status_code().as_u16());
            assert_eq!(detail.detail, err.to_string());
            assert_eq!(detail.title, err.title());
        }
    }

    #[test]
    fn test_errors_empty_without_validation_data() {
        let detail = AppError::resource_not_found("id 5 not found").to_error_detail();
        assert!(detail.errors.is_empty());

        let detail = AppError::Internal("boom".to_string()).to_error_detail();
        assert!(detail.errors.is_empty());
    }

    #[test]
    fn test_validation_errors_are_listed_in_order() {
        let err = AppError::Validation {
            message: "Invalid school payload".to_string(),
            violations: vec![
                FieldViolation::new("name", "must not be blank"),
                FieldViolation::new("name", "must be at most 100 characters"),
            ],
        };
        let detail = err.to_error_detail();
        assert_eq!(
            detail.errors,
            vec![
                "name: must not be blank".to_string(),
                "name: must be at most 100 characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_timestamp_is_monotonically_non_decreasing() {
        let err = AppError::Internal("boom".to_string());
        let first = err.to_error_detail();
        let second = err.to_error_detail();
        let third = err.to_error_detail();
        assert!(first.timestamp <= second.timestamp);
        assert!(second.timestamp <= third.timestamp);
    }

    #[test]
    fn test_error_detail_serializes_with_camel_case_fields() {
        let detail = AppError::resource_not_found("id 5 not found").to_error_detail();
        let value = serde_json::to_value(&detail).unwrap();

        assert!(value.get("timestamp").is_some());
        assert_eq!(value.get("status").and_then(|v| v.as_u64()), Some(404));
        assert_eq!(
            value.get("title").and_then(|v| v.as_str()),
            Some("Resource Not Found")
        );
        assert_eq!(
            value.get("detail").and_then(|v| v.as_str()),
            Some("Found an issue with School: id 5 not found")
        );
        assert!(value
            .get("developerMessage")
            .and_then(|v| v.as_str())
            .is_some());
        assert_eq!(
            value.get("errors").and_then(|v| v.as_array()).map(Vec::len),
            Some(0)
        );
    }
}
