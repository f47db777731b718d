//! # Validation Module
//!
//! Required-field checks that gate the guide-creation form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Guide Form Validation                              │
//! │                                                                         │
//! │  Text fields      trimmed value must be non-empty                      │
//! │  Number fields    value must coerce to something above zero            │
//! │  Package counts   at least one of envelopes/boxes/pouches/containers   │
//! │                                                                         │
//! │  Every failing field is reported at once, keyed by its path, so the    │
//! │  form can show all messages in a single pass.                          │
//! │                                                                         │
//! │  There are no cross-field rules (e.g. weight vs. declared value).      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shipguide_core::validation::collect_field_errors;
//! use shipguide_core::GuideForm;
//!
//! let errors = collect_field_errors(&GuideForm::default());
//! assert_eq!(errors.get("consignee.city"), Some("city is required"));
//! assert!(errors.contains("counts"));
//! ```

use crate::error::{CoreError, CoreResult, FieldErrors, ValidationError};
use crate::money::Money;
use crate::types::GuideForm;
use crate::weight::parse_or_zero;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Checks a required text field.
///
/// ## Example
/// ```rust
/// use shipguide_core::validation::validate_required;
///
/// assert!(validate_required("Guadalajara", "city").is_ok());
/// assert!(validate_required("   ", "city").is_err());
/// ```
pub fn validate_required(value: &str, field: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Checks a required numeric field; zero, empty and junk all fail.
pub fn validate_required_number(value: &str, field: &str) -> ValidationResult<()> {
    if parse_or_zero(value) == 0.0 {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Checks the declared value with the same parser the guide record uses.
///
/// Blank is reported as missing; anything typed that does not come out as a
/// positive amount (`"free"`, `"1e3"`, `"0.001"`) is reported as malformed.
///
/// ## Example
/// ```rust
/// use shipguide_core::validation::validate_declared_value;
///
/// assert!(validate_declared_value("1,500").is_ok());
/// assert!(validate_declared_value("").is_err());
/// ```
pub fn validate_declared_value(value: &str) -> ValidationResult<()> {
    const FIELD: &str = "declared value";

    validate_required(value, FIELD)?;

    if !Money::parse_or_zero(value).is_positive() {
        return Err(ValidationError::InvalidFormat {
            field: FIELD.to_string(),
            reason: "must be an amount greater than zero".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Form Validation
// =============================================================================

/// Runs every check and returns the messages keyed by field path.
///
/// An empty map means the form may be submitted.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User clicks "Generate guide"                                          │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  collect_field_errors(&form) ← THIS FUNCTION                           │
/// │       │                                                                 │
/// │       ├── non-empty → messages shown under each field, no guide        │
/// │       │                                                                 │
/// │       └── empty → guide number generated, guide displayed              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn collect_field_errors(form: &GuideForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let c = &form.consignee;

    let text_fields: [(&str, &str, &str); 7] = [
        ("consignee.legalName", "legal name", c.legal_name.as_str()),
        ("consignee.contactName", "contact name", c.contact_name.as_str()),
        ("consignee.street", "street", c.street.as_str()),
        ("consignee.city", "city", c.city.as_str()),
        ("consignee.state", "state", c.state.as_str()),
        ("consignee.phone", "phone", c.phone.as_str()),
        ("characteristics", "characteristics", form.characteristics.as_str()),
    ];

    for (path, label, value) in text_fields {
        if let Err(e) = validate_required(value, label) {
            errors.insert(path, &e);
        }
    }

    if let Err(e) = validate_declared_value(&form.declared_value) {
        errors.insert("declaredValue", &e);
    }

    if let Err(e) = validate_required_number(&form.package.actual_weight_kg, "actual weight") {
        errors.insert("package.actualWeightKg", &e);
    }

    if !form.counts.has_any() {
        errors.insert(
            "counts",
            &ValidationError::AtLeastOne {
                field: "package".to_string(),
            },
        );
    }

    errors
}

/// Gate for submission: `Ok` only when no field fails.
pub fn validate_guide_form(form: &GuideForm) -> CoreResult<()> {
    let errors = collect_field_errors(form);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::FormInvalid(errors))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
