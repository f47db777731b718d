//! # Guide Commands
//!
//! Submission of the guide form and guide-number lookups.
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_guide()                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate draft ── errors? ──► store errors in draft, return            │
//! │       │                        ApiError { VALIDATION_ERROR }            │
//! │       ▼                                                                 │
//! │  draw SR-NNNNNN, then the record id, from IdentifierState               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build Guide (status: generated), clear draft, return Guide            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both draws happen only after validation passes; a rejected submit never
//! consumes one.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shipguide_core::{CoreError, Guide, GuideIdentifier};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{ConfigState, FormState, IdentifierState};

/// Validates the draft and, if it passes, generates the guide.
pub fn submit_guide(form: &FormState, ids: &IdentifierState) -> Result<Guide, ApiError> {
    debug!("submit_guide command");

    form.with_draft_mut(|d| {
        if !d.validate() {
            warn!(fields = d.errors.len(), "guide submission rejected");
            return Err(ApiError::from(CoreError::FormInvalid(d.errors.clone())));
        }

        let number = ids.next_identifier();
        let guide = Guide::from_form(&d.form, ids.next_record_id(), number, Utc::now());
        info!(
            number = %guide.number,
            id = %guide.id,
            total_weight_kg = guide.package.total_weight_kg,
            "guide generated"
        );

        d.clear();
        Ok(guide)
    })
}

/// Checks a guide number typed into a search box.
pub fn lookup_guide_number(raw: &str) -> Result<GuideIdentifier, ApiError> {
    debug!(raw = %raw, "lookup_guide_number command");
    GuideIdentifier::parse(raw).map_err(|e| ApiError::from(CoreError::from(e)))
}

/// Display strings for the generated guide screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideSummary {
    pub issuer: String,
    pub number: String,
    pub consignee: String,
    pub pieces: u64,
    pub declared_value: String,
    pub dimensional_weight: String,
    pub total_weight: String,
}

/// Formats a guide with the session's currency and weight settings.
pub fn guide_summary(config: &ConfigState, guide: &Guide) -> GuideSummary {
    GuideSummary {
        issuer: config.company_name.clone(),
        number: guide.number.to_string(),
        consignee: guide.consignee.legal_name.clone(),
        pieces: guide.counts.total(),
        declared_value: config.format_currency(guide.declared_value.cents()),
        dimensional_weight: config.format_weight(guide.package.dimensional_weight_kg),
        total_weight: config.format_weight(guide.package.total_weight_kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::FormField;
    use shipguide_core::GuideStatus;

    fn fill_valid(form: &FormState) {
        let edits = [
            (FormField::LegalName, "Textiles del Bajío SA"),
            (FormField::ContactName, "Jorge Ruiz"),
            (FormField::Street, "Calle 5 de Mayo 44"),
            (FormField::City, "León"),
            (FormField::State, "Guanajuato"),
            (FormField::Phone, "4771234567"),
            (FormField::Characteristics, "Fabric rolls"),
            (FormField::DeclaredValue, "1500.50"),
            (FormField::ActualWeight, "3"),
            (FormField::Length, "40"),
            (FormField::Width, "30"),
            (FormField::Height, "20"),
            (FormField::Boxes, "2"),
        ];
        form.with_draft_mut(|d| {
            for (field, value) in edits {
                d.set_field(field, value.to_string());
            }
        });
    }

    #[test]
    fn test_rejected_submit_keeps_draft_and_errors() {
        let form = FormState::new();
        let ids = IdentifierState::new(Some(1));
        form.with_draft_mut(|d| d.set_field(FormField::City, "León".into()));

        let err = submit_guide(&form, &ids).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let fields = err.field_errors.expect("field map");
        assert!(fields.contains("consignee.legalName"));
        assert!(!fields.contains("consignee.city"));

        form.with_draft(|d| {
            assert_eq!(d.form.consignee.city, "León");
            assert_eq!(d.errors, fields);
        });
    }

    #[test]
    fn test_successful_submit_generates_guide_and_clears() {
        let form = FormState::new();
        let ids = IdentifierState::new(Some(1));
        fill_valid(&form);

        let guide = submit_guide(&form, &ids).unwrap();
        assert_eq!(guide.status, GuideStatus::Generated);
        assert!(GuideIdentifier::parse(guide.number.as_str()).is_ok());
        assert_eq!(guide.package.dimensional_weight_kg, 4.0);
        assert_eq!(guide.package.total_weight_kg, 4.0);
        assert_eq!(guide.declared_value.cents(), 150050);

        form.with_draft(|d| {
            assert!(d.form.consignee.legal_name.is_empty());
            assert!(d.errors.is_empty());
        });
    }

    #[test]
    fn test_rejected_submit_does_not_consume_a_number() {
        let seeded = IdentifierState::new(Some(5));
        let reference = IdentifierState::new(Some(5));

        let form = FormState::new();
        assert!(submit_guide(&form, &seeded).is_err());

        fill_valid(&form);
        let guide = submit_guide(&form, &seeded).unwrap();
        assert_eq!(guide.number, reference.next_identifier());
        assert_eq!(guide.id, reference.next_record_id().to_string());
    }

    #[test]
    fn test_lookup_guide_number() {
        assert_eq!(
            lookup_guide_number("SR-482913").unwrap().as_str(),
            "SR-482913"
        );
        let err = lookup_guide_number("482913").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidGuideNumber);
    }

    #[test]
    fn test_guide_summary() {
        let form = FormState::new();
        let ids = IdentifierState::new(Some(3));
        fill_valid(&form);
        let guide = submit_guide(&form, &ids).unwrap();

        let summary = guide_summary(&ConfigState::default(), &guide);
        assert_eq!(summary.issuer, "Demo Shipping Co.");
        assert_eq!(summary.number, guide.number.to_string());
        assert_eq!(summary.consignee, "Textiles del Bajío SA");
        assert_eq!(summary.pieces, 2);
        assert_eq!(summary.declared_value, "$1500.50");
        assert_eq!(summary.dimensional_weight, "4.00 kg");
        assert_eq!(summary.total_weight, "4.00 kg");
    }
}
