//! # Domain Types
//!
//! The guide-creation form and the guide record it turns into.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                    ┌─────────────────────┐         │
//! │  │   GuideForm     │   validate +       │       Guide         │         │
//! │  │  ─────────────  │   generate id      │  ─────────────────  │         │
//! │  │  consignee      │ ─────────────────► │  id (UUID)          │         │
//! │  │  characteristics│                    │  number (SR-NNNNNN) │         │
//! │  │  declared_value │                    │  status             │         │
//! │  │  package (text) │                    │  package (kg, cm)   │         │
//! │  │  counts         │                    │  declared_value     │         │
//! │  └─────────────────┘                    └─────────────────────┘         │
//! │                                                                         │
//! │  Form fields are raw strings: the user may type anything. Numbers are  │
//! │  only coerced when a ShipmentPackage or Money is derived from them.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! A guide has:
//! - `id`: UUID v4 - immutable, for the surrounding app to reference
//! - `number`: `SR-NNNNNN` - what people read and print

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::guide_id::GuideIdentifier;
use crate::money::Money;
use crate::weight::{compute_weights_kg, parse_or_zero, WeightBreakdown};

// =============================================================================
// Consignee
// =============================================================================

/// Recipient of the shipment (the "consignatario").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Consignee {
    /// Company or person name as it appears on invoices.
    pub legal_name: String,

    /// Person who receives the package.
    pub contact_name: String,

    pub street: String,

    pub neighborhood: Option<String>,

    pub postal_code: Option<String>,

    pub city: String,

    pub state: String,

    pub phone: String,
}

// =============================================================================
// Package Input
// =============================================================================

/// The four numeric package fields exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageInput {
    pub actual_weight_kg: String,
    pub length_cm: String,
    pub width_cm: String,
    pub height_cm: String,
}

impl PackageInput {
    /// Derived weights for the current text. Cheap enough to call per keystroke.
    pub fn weights(&self) -> WeightBreakdown {
        ShipmentPackage::from_input(self).weights()
    }
}

// =============================================================================
// Package Counts
// =============================================================================

/// How many pieces of each packaging type the guide covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageCounts {
    pub envelopes: u32,
    pub boxes: u32,
    pub pouches: u32,
    pub containers: u32,
}

impl PackageCounts {
    /// Total number of pieces.
    pub fn total(&self) -> u64 {
        [self.envelopes, self.boxes, self.pouches, self.containers]
            .iter()
            .map(|&c| u64::from(c))
            .sum()
    }

    /// True when at least one packaging type has a count above zero.
    pub fn has_any(&self) -> bool {
        self.total() > 0
    }
}

// =============================================================================
// Guide Form
// =============================================================================

/// Everything the guide-creation form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct GuideForm {
    pub consignee: Consignee,

    /// Free-text description of the contents.
    pub characteristics: String,

    /// Declared value as typed, e.g. `"1250.00"`.
    pub declared_value: String,

    pub package: PackageInput,

    pub counts: PackageCounts,

    pub notes: Option<String>,
}

// =============================================================================
// Shipment Package
// =============================================================================

/// Parsed package figures with both derived weights.
///
/// ## Invariant
/// `total_weight_kg == max(actual_weight_kg, dimensional_weight_kg)`.
/// Build it with [`ShipmentPackage::from_input`] or
/// [`ShipmentPackage::from_measurements`], which derive both weights together.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentPackage {
    pub actual_weight_kg: f64,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub dimensional_weight_kg: f64,
    pub total_weight_kg: f64,
}

impl ShipmentPackage {
    /// Parses the form text, coercing anything unusable to zero.
    pub fn from_input(input: &PackageInput) -> Self {
        Self::from_measurements(
            parse_or_zero(&input.actual_weight_kg),
            parse_or_zero(&input.length_cm),
            parse_or_zero(&input.width_cm),
            parse_or_zero(&input.height_cm),
        )
    }

    pub fn from_measurements(
        actual_weight_kg: f64,
        length_cm: f64,
        width_cm: f64,
        height_cm: f64,
    ) -> Self {
        let weights = compute_weights_kg(actual_weight_kg, length_cm, width_cm, height_cm);
        let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };

        ShipmentPackage {
            actual_weight_kg: clean(actual_weight_kg),
            length_cm: clean(length_cm),
            width_cm: clean(width_cm),
            height_cm: clean(height_cm),
            dimensional_weight_kg: weights.dimensional_weight_kg,
            total_weight_kg: weights.total_weight_kg,
        }
    }

    pub fn weights(&self) -> WeightBreakdown {
        WeightBreakdown {
            dimensional_weight_kg: self.dimensional_weight_kg,
            total_weight_kg: self.total_weight_kg,
        }
    }
}

// =============================================================================
// Guide Status
// =============================================================================

/// Tracking status of a guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum GuideStatus {
    /// Number issued, package not yet picked up.
    #[default]
    Generated,
    /// Picked up and on its way.
    InTransit,
    /// Handed to the consignee.
    Delivered,
    /// Voided before pickup.
    Cancelled,
}

// =============================================================================
// Guide
// =============================================================================

/// A generated shipping guide (waybill).
///
/// Built only after the form passed validation; lives in memory until the
/// surrounding view is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display number, e.g. `SR-482913`.
    pub number: GuideIdentifier,

    pub status: GuideStatus,

    pub consignee: Consignee,

    pub characteristics: String,

    pub declared_value: Money,

    pub package: ShipmentPackage,

    pub counts: PackageCounts,

    pub notes: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Guide {
    /// Assembles the record for an already validated form.
    ///
    /// The caller supplies the id, number and timestamp so this stays pure.
    pub fn from_form(
        form: &GuideForm,
        id: Uuid,
        number: GuideIdentifier,
        created_at: DateTime<Utc>,
    ) -> Self {
        Guide {
            id: id.to_string(),
            number,
            status: GuideStatus::Generated,
            consignee: form.consignee.clone(),
            characteristics: form.characteristics.trim().to_string(),
            declared_value: Money::parse_or_zero(&form.declared_value),
            package: ShipmentPackage::from_input(&form.package),
            counts: form.counts,
            notes: form
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            created_at,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
