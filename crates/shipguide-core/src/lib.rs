//! # shipguide-core: Pure Logic for Shipping Guides
//!
//! This crate holds the computational part of the shipping guide app as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Shipping Guide Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Web UI (company / admin dashboards)             │   │
//! │  │    Guide Form ──► Weight Preview ──► Submit ──► Guide Number    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ field changes / submit                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 guide-session (form state + commands)           │   │
//! │  │    update_field, submit_guide, reset_form, get_config           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shipguide-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  weight   │  │ guide_id  │  │   types   │  │ validation│  │   │
//! │  │   │ dim / tot │  │ SR-NNNNNN │  │ GuideForm │  │ field map │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`weight`] - Dimensional and billable weight
//! - [`guide_id`] - `SR-NNNNNN` guide numbers
//! - [`types`] - Form and guide record types
//! - [`money`] - Declared value in integer cents
//! - [`validation`] - Required-field checks for the guide form
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shipguide_core::weight::compute_weights;
//!
//! // 40 × 30 × 20 cm box weighing 3 kg: the volume wins
//! let weights = compute_weights("3", "40", "30", "20");
//! assert_eq!(weights.dimensional_weight_kg, 4.0);
//! assert_eq!(weights.total_weight_kg, 4.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod guide_id;
pub mod money;
pub mod types;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, FieldErrors, ValidationError};
pub use guide_id::{generate_guide_identifier, generate_record_id, GuideIdentifier};
pub use money::Money;
pub use types::*;
pub use weight::{compute_weights, compute_weights_kg, parse_or_zero, WeightBreakdown};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Volumetric divisor in cm³ per kg.
///
/// Printed paper guides use the same factor, so it must stay 6000.
pub const DIMENSIONAL_WEIGHT_DIVISOR: f64 = 6000.0;

/// Prefix of every guide number.
pub const GUIDE_NUMBER_PREFIX: &str = "SR";

/// Smallest numeric part of a guide number.
pub const GUIDE_NUMBER_MIN: u32 = 100_000;

/// Largest numeric part of a guide number.
pub const GUIDE_NUMBER_MAX: u32 = 999_999;
