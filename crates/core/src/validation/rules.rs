//! Validation violation and report types.

use serde::{Deserialize, Serialize};

use crate::school::SchoolField;

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: SchoolField, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str().to_string(),
            message: message.into(),
        }
    }
}

/// Aggregated result of validating a whole draft.
///
/// Each field contributes at most one violation (the first failing rule for
/// that field wins), so `violations` doubles as a field → message mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<FieldViolation>,
}

impl ValidationReport {
    /// The message for a field, if it failed validation.
    pub fn message_for(&self, field: SchoolField) -> Option<&str> {
        self.violations
            .iter()
            .find(|v| v.field == field.as_str())
            .map(|v| v.message.as_str())
    }

    /// Whether a specific field failed validation.
    pub fn has_violation(&self, field: SchoolField) -> bool {
        self.message_for(field).is_some()
    }
}
