//! # Form State
//!
//! Holds the guide form currently being edited.
//!
//! ## Derived Weights
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Field Change → Weight Refresh                        │
//! │                                                                         │
//! │  UI edit                  Command               Draft change            │
//! │  ───────                  ───────               ────────────            │
//! │                                                                         │
//! │  Type consignee city ───► update_field() ─────► form.consignee.city    │
//! │                                                                         │
//! │  Type height "20" ──────► update_field() ─────► form.package.height    │
//! │                                                 + weights re-derived    │
//! │                                                                         │
//! │  Paste whole form ──────► load_form() ────────► form replaced           │
//! │                                                 + weights re-derived    │
//! │                                                                         │
//! │  The weights are recomputed synchronously inside the same lock as the  │
//! │  write, so a reader never sees a total from older dimensions.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use shipguide_core::validation::collect_field_errors;
use shipguide_core::{FieldErrors, GuideForm, WeightBreakdown};

// =============================================================================
// Form Field
// =============================================================================

/// Every editable input of the guide form, named by its field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    #[serde(rename = "consignee.legalName")]
    LegalName,
    #[serde(rename = "consignee.contactName")]
    ContactName,
    #[serde(rename = "consignee.street")]
    Street,
    #[serde(rename = "consignee.neighborhood")]
    Neighborhood,
    #[serde(rename = "consignee.postalCode")]
    PostalCode,
    #[serde(rename = "consignee.city")]
    City,
    #[serde(rename = "consignee.state")]
    State,
    #[serde(rename = "consignee.phone")]
    Phone,
    #[serde(rename = "characteristics")]
    Characteristics,
    #[serde(rename = "declaredValue")]
    DeclaredValue,
    #[serde(rename = "package.actualWeightKg")]
    ActualWeight,
    #[serde(rename = "package.lengthCm")]
    Length,
    #[serde(rename = "package.widthCm")]
    Width,
    #[serde(rename = "package.heightCm")]
    Height,
    #[serde(rename = "counts.envelopes")]
    Envelopes,
    #[serde(rename = "counts.boxes")]
    Boxes,
    #[serde(rename = "counts.pouches")]
    Pouches,
    #[serde(rename = "counts.containers")]
    Containers,
    #[serde(rename = "notes")]
    Notes,
}

impl FormField {
    /// True for the four inputs the weight breakdown depends on.
    pub fn affects_weights(self) -> bool {
        matches!(
            self,
            FormField::ActualWeight | FormField::Length | FormField::Width | FormField::Height
        )
    }
}

/// Count inputs follow the weight rule: junk means zero.
fn parse_count_or_zero(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

// =============================================================================
// Guide Draft
// =============================================================================

/// The form plus everything derived from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideDraft {
    pub form: GuideForm,

    /// Always in sync with `form.package`.
    pub weights: WeightBreakdown,

    /// Messages from the last rejected submission.
    pub errors: FieldErrors,
}

impl GuideDraft {
    pub fn new() -> Self {
        GuideDraft::default()
    }

    /// Writes one input and refreshes the weights if it feeds them.
    pub fn set_field(&mut self, field: FormField, value: String) {
        let form = &mut self.form;
        let consignee = &mut form.consignee;

        match field {
            FormField::LegalName => consignee.legal_name = value,
            FormField::ContactName => consignee.contact_name = value,
            FormField::Street => consignee.street = value,
            FormField::Neighborhood => consignee.neighborhood = optional(value),
            FormField::PostalCode => consignee.postal_code = optional(value),
            FormField::City => consignee.city = value,
            FormField::State => consignee.state = value,
            FormField::Phone => consignee.phone = value,
            FormField::Characteristics => form.characteristics = value,
            FormField::DeclaredValue => form.declared_value = value,
            FormField::ActualWeight => form.package.actual_weight_kg = value,
            FormField::Length => form.package.length_cm = value,
            FormField::Width => form.package.width_cm = value,
            FormField::Height => form.package.height_cm = value,
            FormField::Envelopes => form.counts.envelopes = parse_count_or_zero(&value),
            FormField::Boxes => form.counts.boxes = parse_count_or_zero(&value),
            FormField::Pouches => form.counts.pouches = parse_count_or_zero(&value),
            FormField::Containers => form.counts.containers = parse_count_or_zero(&value),
            FormField::Notes => form.notes = optional(value),
        }

        if field.affects_weights() {
            self.refresh_weights();
        }
    }

    /// Replaces the whole form (e.g. duplicating an earlier guide).
    pub fn replace_form(&mut self, form: GuideForm) {
        self.form = form;
        self.errors = FieldErrors::new();
        self.refresh_weights();
    }

    /// Runs validation and keeps the messages for display.
    ///
    /// Returns `true` when the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = collect_field_errors(&self.form);
        self.errors.is_empty()
    }

    /// Back to an empty form.
    pub fn clear(&mut self) {
        *self = GuideDraft::new();
    }

    fn refresh_weights(&mut self) {
        self.weights = self.form.package.weights();
    }
}

// =============================================================================
// Form State
// =============================================================================

/// Shared handle to the draft.
///
/// ## Thread Safety
/// `Arc<Mutex<GuideDraft>>`: one writer at a time, and the weight refresh
/// happens under the same lock as the edit that caused it.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    draft: Arc<Mutex<GuideDraft>>,
}

impl FormState {
    pub fn new() -> Self {
        FormState::default()
    }

    /// Executes a function with read access to the draft.
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&GuideDraft) -> R,
    {
        let draft = self.draft.lock().unwrap_or_else(PoisonError::into_inner);
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut GuideDraft) -> R,
    {
        let mut draft = self.draft.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_fields_refresh_weights() {
        let mut draft = GuideDraft::new();

        draft.set_field(FormField::ActualWeight, "3".into());
        assert_eq!(draft.weights.total_weight_kg, 3.0);

        draft.set_field(FormField::Length, "40".into());
        draft.set_field(FormField::Width, "30".into());
        assert_eq!(draft.weights.dimensional_weight_kg, 0.0);

        draft.set_field(FormField::Height, "20".into());
        assert_eq!(draft.weights.dimensional_weight_kg, 4.0);
        assert_eq!(draft.weights.total_weight_kg, 4.0);

        draft.set_field(FormField::Height, "".into());
        assert_eq!(draft.weights.dimensional_weight_kg, 0.0);
        assert_eq!(draft.weights.total_weight_kg, 3.0);
    }

    #[test]
    fn test_weights_always_match_package() {
        let mut draft = GuideDraft::new();
        let edits = [
            (FormField::Length, "10"),
            (FormField::City, "León"),
            (FormField::Width, "abc"),
            (FormField::Width, "10"),
            (FormField::Height, "10"),
            (FormField::ActualWeight, "-1"),
            (FormField::ActualWeight, "0.05"),
            (FormField::Boxes, "2"),
        ];
        for (field, value) in edits {
            draft.set_field(field, value.to_string());
            assert_eq!(draft.weights, draft.form.package.weights());
        }
    }

    #[test]
    fn test_counts_and_optionals() {
        let mut draft = GuideDraft::new();
        draft.set_field(FormField::Boxes, " 3 ".into());
        draft.set_field(FormField::Pouches, "two".into());
        draft.set_field(FormField::Neighborhood, "  ".into());
        draft.set_field(FormField::PostalCode, "44100".into());

        assert_eq!(draft.form.counts.boxes, 3);
        assert_eq!(draft.form.counts.pouches, 0);
        assert_eq!(draft.form.consignee.neighborhood, None);
        assert_eq!(draft.form.consignee.postal_code.as_deref(), Some("44100"));
    }

    #[test]
    fn test_replace_form_refreshes_and_clears_errors() {
        let mut draft = GuideDraft::new();
        assert!(!draft.validate());
        assert!(!draft.errors.is_empty());

        let mut form = GuideForm::default();
        form.package.length_cm = "40".into();
        form.package.width_cm = "30".into();
        form.package.height_cm = "20".into();
        draft.replace_form(form);

        assert!(draft.errors.is_empty());
        assert_eq!(draft.weights.total_weight_kg, 4.0);
    }

    #[test]
    fn test_field_names_use_paths() {
        let field: FormField = serde_json::from_str("\"package.heightCm\"").unwrap();
        assert_eq!(field, FormField::Height);
        assert!(field.affects_weights());
        assert!(!FormField::Boxes.affects_weights());
        assert!(serde_json::from_str::<FormField>("\"package.depth\"").is_err());
    }

    #[test]
    fn test_form_state_shares_draft() {
        let state = FormState::new();
        let clone = state.clone();
        clone.with_draft_mut(|d| d.set_field(FormField::ActualWeight, "7".into()));
        assert_eq!(state.with_draft(|d| d.weights.total_weight_kg), 7.0);
    }
}
