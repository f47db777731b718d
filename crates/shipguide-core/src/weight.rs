//! # Weight Module
//!
//! Dimensional (volumetric) weight and billable weight for a package.
//!
//! ## Billable Weight
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A carrier bills the GREATER of two figures:                            │
//! │                                                                         │
//! │    actual weight       what the scale says                              │
//! │    dimensional weight  length × width × height / 6000                   │
//! │                                                                         │
//! │  40 × 30 × 20 cm box at 3 kg:                                          │
//! │    dimensional = 24000 / 6000 = 4 kg                                   │
//! │    billable    = max(3, 4)    = 4 kg                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input Coercion
//! The form hands us raw text. Anything that is not a non-negative finite
//! number (empty, "abc", "-2", "NaN") counts as `0`, and so does a volume too
//! large for `f64`. Nothing here returns an error or panics; the UI just shows
//! zero.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::DIMENSIONAL_WEIGHT_DIVISOR;

// =============================================================================
// Parsing
// =============================================================================

/// Parses a numeric form field, falling back to `0.0`.
///
/// ## Example
/// ```rust
/// use shipguide_core::weight::parse_or_zero;
///
/// assert_eq!(parse_or_zero(" 12.5 "), 12.5);
/// assert_eq!(parse_or_zero(""), 0.0);
/// assert_eq!(parse_or_zero("kg"), 0.0);
/// assert_eq!(parse_or_zero("-4"), 0.0);
/// ```
pub fn parse_or_zero(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

// =============================================================================
// Weight Breakdown
// =============================================================================

/// The two derived figures shown under the package inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WeightBreakdown {
    /// Volume-based weight, `0` unless all three dimensions are set.
    pub dimensional_weight_kg: f64,

    /// Billable weight: `max(actual, dimensional)`.
    pub total_weight_kg: f64,
}

/// Dimensional weight for the given dimensions in centimetres.
///
/// Returns `0.0` as soon as any dimension is zero, and also when the volume
/// overflows `f64` (e.g. three sides of `1e200`).
pub fn dimensional_weight_kg(length_cm: f64, width_cm: f64, height_cm: f64) -> f64 {
    if length_cm == 0.0 || width_cm == 0.0 || height_cm == 0.0 {
        return 0.0;
    }

    let weight = (length_cm * width_cm * height_cm) / DIMENSIONAL_WEIGHT_DIVISOR;
    if weight.is_finite() {
        weight
    } else {
        0.0
    }
}

/// Computes the breakdown from already-parsed values.
///
/// Inputs go through the same coercion as form text: negatives and
/// non-finite values count as zero.
pub fn compute_weights_kg(
    actual_weight_kg: f64,
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
) -> WeightBreakdown {
    let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };

    let actual = sanitize(actual_weight_kg);
    let dimensional =
        dimensional_weight_kg(sanitize(length_cm), sanitize(width_cm), sanitize(height_cm));

    WeightBreakdown {
        dimensional_weight_kg: dimensional,
        total_weight_kg: actual.max(dimensional),
    }
}

/// Computes the breakdown straight from the four form fields.
///
/// Call this after every change to any of the fields; the result is never
/// cached.
///
/// ## User Workflow
/// ```text
/// User types "20" into Height
///      │
///      ▼
/// compute_weights(actual, length, width, "20") ← THIS FUNCTION
///      │
///      ▼
/// "Dimensional: 4.00 kg   Total: 4.00 kg" refreshes immediately
/// ```
///
/// ## Example
/// ```rust
/// use shipguide_core::weight::compute_weights;
///
/// let w = compute_weights("10", "10", "10", "10");
/// assert_eq!(w.total_weight_kg, 10.0); // actual wins over 0.1667
/// ```
pub fn compute_weights(actual: &str, length: &str, width: &str, height: &str) -> WeightBreakdown {
    compute_weights_kg(
        parse_or_zero(actual),
        parse_or_zero(length),
        parse_or_zero(width),
        parse_or_zero(height),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
