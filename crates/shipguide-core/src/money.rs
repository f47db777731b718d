//! # Money Module
//!
//! Provides the `Money` type used for a guide's declared value.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "1250.75" is parsed digit by digit into 125075 cents                │
//! │    No float ever touches the declared value                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shipguide_core::money::Money;
//!
//! let declared = Money::parse_or_zero("1,250.75");
//! assert_eq!(declared.cents(), 125075);
//!
//! // Same permissive rule as the weight fields
//! assert!(!Money::parse_or_zero("n/a").is_positive());
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// GuideForm.declared_value ("1250.75")
///      │
///      ▼
/// Money::parse_or_zero ──► validation (must be non-zero)
///      │
///      ▼
/// Guide.declared_value ──► ConfigState::format_currency on the summary
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Parses a decimal form field (`"1250"`, `"1,250.5"`, `" 0.75 "`).
    ///
    /// ## Rules
    /// - ASCII digits, at most one `.`, and `,` group separators before it
    /// - A third decimal rounds half up, further decimals are ignored
    /// - Anything else (empty, signs, letters, overflow) gives zero
    pub fn parse_or_zero(raw: &str) -> Self {
        Self::parse_cents(raw.trim()).map(Money).unwrap_or_default()
    }

    fn parse_cents(raw: &str) -> Option<i64> {
        let (whole, frac) = match raw.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (raw, ""),
        };
        let whole = whole.replace(',', "");

        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let frac = frac.as_bytes();
        let digit = |i: usize| frac.get(i).map(|b| i64::from(b - b'0')).unwrap_or(0);
        let round_up = i64::from(digit(2) >= 5);

        whole
            .checked_mul(100)?
            .checked_add(digit(0) * 10 + digit(1) + round_up)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
