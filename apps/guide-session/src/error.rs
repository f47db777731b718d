//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_guide()                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError::FormInvalid(fields) ──► ApiError {                          │
//! │                                        code: "VALIDATION_ERROR",        │
//! │                                        message: "...",                  │
//! │                                        fieldErrors: { path: msg, .. }   │
//! │                                     }                                   │
//! │                                                                         │
//! │  The form renders `fieldErrors` inline next to each input.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shipguide_core::{CoreError, FieldErrors, ValidationError};

/// Error returned from session commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Guide form has 1 invalid field(s)",
///   "fieldErrors": { "consignee.city": "city is required" }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field messages when the form was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Guide form failed validation (400)
    ValidationError,

    /// A typed guide number is malformed (400)
    InvalidGuideNumber,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field_errors: None,
        }
    }

    /// Creates a validation error carrying the field map.
    pub fn form_invalid(message: impl Into<String>, fields: FieldErrors) -> Self {
        ApiError {
            field_errors: Some(fields),
            ..ApiError::new(ErrorCode::ValidationError, message)
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::FormInvalid(fields) => ApiError::form_invalid(message, fields),
            CoreError::Validation(e @ ValidationError::InvalidFormat { .. }) => {
                ApiError::new(ErrorCode::InvalidGuideNumber, e.to_string())
            }
            CoreError::Validation(e) => ApiError::new(ErrorCode::ValidationError, e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_invalid_keeps_field_map() {
        let mut fields = FieldErrors::new();
        fields.insert(
            "consignee.city",
            &ValidationError::Required {
                field: "city".to_string(),
            },
        );

        let api: ApiError = CoreError::FormInvalid(fields).into();
        assert_eq!(api.code, ErrorCode::ValidationError);

        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Guide form has 1 invalid field(s)");
        assert_eq!(json["fieldErrors"]["consignee.city"], "city is required");
    }

    #[test]
    fn test_bad_guide_number_maps_to_its_own_code() {
        let core: CoreError = ValidationError::InvalidFormat {
            field: "guide number".to_string(),
            reason: "must start with SR-".to_string(),
        }
        .into();
        let api = ApiError::from(core);
        assert_eq!(api.code, ErrorCode::InvalidGuideNumber);
        assert_eq!(api.message, "guide number has invalid format: must start with SR-");

        let json = serde_json::to_value(&api).unwrap();
        assert!(json.get("fieldErrors").is_none());
    }
}
