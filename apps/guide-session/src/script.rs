//! # Session Scripts
//!
//! A JSON description of what a user did on the form, replayed through the
//! same commands the UI uses.
//!
//! ```json
//! {
//!   "form": { "consignee": { "legalName": "ACME" } },
//!   "patches": [
//!     { "field": "package.lengthCm", "value": "40" },
//!     { "field": "counts.boxes", "value": "1" }
//!   ],
//!   "submit": true
//! }
//! ```

use serde::{Deserialize, Serialize};
use shipguide_core::{Guide, GuideForm};

use crate::commands::form::{get_form, load_form, update_field, FormResponse};
use crate::commands::guide::{guide_summary, submit_guide, GuideSummary};
use crate::error::ApiError;
use crate::state::{ConfigState, FormField, FormState, IdentifierState};

/// One field edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldPatch {
    pub field: FormField,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionScript {
    /// Starting contents; an empty form when absent.
    #[serde(default)]
    pub form: Option<GuideForm>,

    /// Edits applied in order after `form` is loaded.
    #[serde(default)]
    pub patches: Vec<FieldPatch>,

    #[serde(default = "default_submit")]
    pub submit: bool,
}

fn default_submit() -> bool {
    true
}

/// What the session ended with.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutcome {
    /// The form after the last edit (cleared again after a successful submit).
    pub form: FormResponse,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide: Option<Guide>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<GuideSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Replays `script` against the given states.
pub fn execute(
    script: SessionScript,
    form: &FormState,
    ids: &IdentifierState,
    config: &ConfigState,
) -> SessionOutcome {
    let mut last = load_form(form, script.form.unwrap_or_default());
    for patch in script.patches {
        last = update_field(form, patch.field, patch.value);
    }

    let mut outcome = SessionOutcome {
        form: last,
        guide: None,
        summary: None,
        error: None,
    };

    if !script.submit {
        return outcome;
    }

    match submit_guide(form, ids) {
        Ok(guide) => {
            outcome.summary = Some(guide_summary(config, &guide));
            outcome.guide = Some(guide);
        }
        Err(e) => outcome.error = Some(e),
    }
    outcome.form = get_form(form);
    outcome
}
