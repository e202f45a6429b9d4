use uuid::Uuid;

use crate::error::AppError;
use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum SchoolServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("{message}")]
    Invalid {
        message: String,
        violations: Vec<FieldViolation>,
    },
    #[error("school not found")]
    NotFound(Uuid),
    #[error("school already exists")]
    Conflict(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for SchoolServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation {
                message,
                violations,
            } => SchoolServiceError::Invalid {
                message,
                violations,
            },
            _ => SchoolServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<SchoolServiceError> for AppError {
    fn from(err: SchoolServiceError) -> Self {
        match err {
            SchoolServiceError::Invalid {
                message,
                violations,
            } => AppError::Validation {
                message,
                violations,
            },
            SchoolServiceError::NotFound(school_id) => AppError::resource_not_found(format!(
                "School with id {} not found",
                school_id
            )),
            SchoolServiceError::Conflict(name) => {
                AppError::ResourceFound(format!("School with name {} already exists", name))
            }
            SchoolServiceError::Dependency(msg) => AppError::Internal(msg),
            SchoolServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_converts_to_prefixed_resource_error() {
        let school_id = Uuid::nil();
        let err: AppError = SchoolServiceError::NotFound(school_id).into();
        assert_eq!(
            err.to_string(),
            format!(
                "Found an issue with School: School with id {} not found",
                school_id
            )
        );
    }

    #[test]
    fn test_conflict_converts_to_resource_found() {
        let err: AppError = SchoolServiceError::Conflict("Lambda".to_string()).into();
        assert!(matches!(err, AppError::ResourceFound(_)));
        assert_eq!(err.to_string(), "School with name Lambda already exists");
    }

    #[test]
    fn test_invalid_keeps_violations_through_conversion() {
        let service_err = SchoolServiceError::Invalid {
            message: "Invalid school payload".to_string(),
            violations: vec![FieldViolation::new("name", "must not be blank")],
        };
        let err: AppError = service_err.into();
        match err {
            AppError::Validation { violations, .. } => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "name");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
