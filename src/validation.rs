use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A single field-level validation failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Extract the field-level violation messages carried by an error.
///
/// Errors without validation data yield an empty list.
pub fn violation_messages(err: &AppError) -> Vec<String> {
    match err {
        AppError::Validation { violations, .. } => violations
            .iter()
            .map(|violation| format!("{}: {}", violation.field, violation.message))
            .collect(),
        _ => Vec::new(),
    }
}
