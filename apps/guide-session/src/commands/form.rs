//! # Form Commands
//!
//! Commands the guide-creation form calls while the user types.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Editing  │────►│ Submit   │────►│  Guide   │       │
//! │  │  Form    │     │          │     │          │     │  Shown   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │  ▲              │                              │
//! │                update_field │        errors shown                      │
//! │                load_form    └────────────┘                             │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   reset_form ──────────────────────►  (back to empty)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use shipguide_core::{FieldErrors, GuideForm, WeightBreakdown};
use tracing::debug;

use crate::state::{FormField, FormState, GuideDraft};

/// Form contents plus derived weights and current messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub form: GuideForm,
    pub weights: WeightBreakdown,
    pub errors: FieldErrors,
}

impl From<&GuideDraft> for FormResponse {
    fn from(draft: &GuideDraft) -> Self {
        FormResponse {
            form: draft.form.clone(),
            weights: draft.weights,
            errors: draft.errors.clone(),
        }
    }
}

/// Gets the current form.
pub fn get_form(form: &FormState) -> FormResponse {
    debug!("get_form command");
    form.with_draft(|d| FormResponse::from(d))
}

/// Writes one field.
///
/// Weight fields re-derive the dimensional and total weight before the
/// response is built, so the preview under the inputs is never stale.
pub fn update_field(form: &FormState, field: FormField, value: String) -> FormResponse {
    debug!(?field, value = %value, "update_field command");

    form.with_draft_mut(|d| {
        d.set_field(field, value);
        FormResponse::from(&*d)
    })
}

/// Replaces the whole form.
pub fn load_form(form: &FormState, contents: GuideForm) -> FormResponse {
    debug!("load_form command");

    form.with_draft_mut(|d| {
        d.replace_form(contents);
        FormResponse::from(&*d)
    })
}

/// Clears the form.
///
/// ## When Used
/// - User cancels guide creation
/// - After a guide was generated
pub fn reset_form(form: &FormState) -> FormResponse {
    debug!("reset_form command");

    form.with_draft_mut(|d| {
        d.clear();
        FormResponse::from(&*d)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_field_returns_fresh_weights() {
        let state = FormState::new();
        update_field(&state, FormField::Length, "40".into());
        update_field(&state, FormField::Width, "30".into());
        let response = update_field(&state, FormField::Height, "20".into());

        assert_eq!(response.weights.dimensional_weight_kg, 4.0);
        assert_eq!(response.weights.total_weight_kg, 4.0);
        assert_eq!(get_form(&state), response);
    }

    #[test]
    fn test_load_then_reset() {
        let state = FormState::new();
        let mut contents = GuideForm::default();
        contents.package.actual_weight_kg = "5.5".into();

        let loaded = load_form(&state, contents);
        assert_eq!(loaded.weights.total_weight_kg, 5.5);

        let cleared = reset_form(&state);
        assert_eq!(cleared.form, GuideForm::default());
        assert_eq!(cleared.weights, WeightBreakdown::default());
    }

    #[test]
    fn test_response_json_shape() {
        let state = FormState::new();
        let response = update_field(&state, FormField::ActualWeight, "2".into());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["form"]["package"]["actualWeightKg"], "2");
        assert_eq!(json["weights"]["totalWeightKg"], 2.0);
    }
}
