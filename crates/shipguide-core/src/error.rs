//! # Error Types
//!
//! Domain-specific error types for shipguide-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shipguide-core errors (this file)                                     │
//! │  ├── CoreError        - Form rejected / malformed identifiers          │
//! │  ├── ValidationError  - One failing field                              │
//! │  └── FieldErrors      - Field path → message map shown inline          │
//! │                                                                         │
//! │  guide-session errors (app)                                            │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → FieldErrors → CoreError → ApiError → UI       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Weight computation has no error type at all: bad numbers become zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The guide form failed required-field validation.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Generate guide"
    ///      │
    ///      ▼
    /// validate_guide_form()
    ///      │
    ///      ▼
    /// FormInvalid { "consignee.city": "city is required", ... }
    ///      │
    ///      ▼
    /// UI shows the message under each field, nothing is generated
    /// ```
    #[error("Guide form has {} invalid field(s)", .0.len())]
    FormInvalid(FieldErrors),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field failing validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing, empty or zero.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g. a guide number that is not `SR-NNNNNN`).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// None of a group of quantities is above zero.
    #[error("at least one {field} quantity must be greater than zero")]
    AtLeastOne { field: String },
}

// =============================================================================
// Field Errors
// =============================================================================

/// Validation messages keyed by field path (`consignee.city`, `counts`, ...).
///
/// Ordered so the UI and tests see a stable iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        FieldErrors(BTreeMap::new())
    }

    /// Records the message for `path`, replacing any earlier one.
    pub fn insert(&mut self, path: impl Into<String>, error: &ValidationError) {
        self.0.insert(path.into(), error.to_string());
    }

    /// Message recorded for `path`, if any.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Field paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "city".to_string(),
        };
        assert_eq!(err.to_string(), "city is required");

        let err = ValidationError::AtLeastOne {
            field: "package".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "at least one package quantity must be greater than zero"
        );
    }

    #[test]
    fn test_form_invalid_message_counts_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("consignee.city", &ValidationError::Required { field: "city".into() });
        errors.insert("consignee.state", &ValidationError::Required { field: "state".into() });

        let err = CoreError::FormInvalid(errors);
        assert_eq!(err.to_string(), "Guide form has 2 invalid field(s)");
    }

    #[test]
    fn test_field_errors_are_sorted_and_serialize_as_map() {
        let mut errors = FieldErrors::new();
        errors.insert("package.actualWeightKg", &ValidationError::Required { field: "weight".into() });
        errors.insert("characteristics", &ValidationError::Required { field: "characteristics".into() });

        let paths: Vec<&str> = errors.paths().collect();
        assert_eq!(paths, vec!["characteristics", "package.actualWeightKg"]);

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["characteristics"], "characteristics is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::InvalidFormat {
            field: "guide number".to_string(),
            reason: "bad prefix".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
