//! # Guide Identifier Module
//!
//! Display numbers for newly generated guides: `SR-` followed by six digits.
//!
//! ## Allocation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  generate_guide_identifier(&mut rng)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  n = uniform draw in [100000, 999999]                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "SR-" + n zero-padded to 6 digits   →   "SR-483920"                   │
//! │                                                                         │
//! │  NOT checked against previously issued numbers. Two draws can collide. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The generator is passed in so callers choose: `thread_rng()` in
//! production, a seeded `StdRng` in tests.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::{Builder, Uuid};

use crate::error::ValidationError;
use crate::validation::ValidationResult;
use crate::{GUIDE_NUMBER_MAX, GUIDE_NUMBER_MIN, GUIDE_NUMBER_PREFIX};

/// A guide number such as `SR-104233`.
///
/// Deserializing goes through [`GuideIdentifier::parse`], so a value of this
/// type always has the `SR-NNNNNN` shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "String")]
pub struct GuideIdentifier(String);

impl GuideIdentifier {
    /// Builds the identifier for a numeric part.
    ///
    /// The `{:06}` padding never kicks in for in-range numbers but keeps the
    /// width fixed if the range ever changes.
    fn from_number(number: u32) -> Self {
        GuideIdentifier(format!("{}-{:06}", GUIDE_NUMBER_PREFIX, number))
    }

    /// Draws a new identifier from the thread-local generator.
    pub fn random() -> Self {
        generate_guide_identifier(&mut rand::thread_rng())
    }

    /// Parses and checks a guide number typed by a user.
    ///
    /// ## Example
    /// ```rust
    /// use shipguide_core::GuideIdentifier;
    ///
    /// assert!(GuideIdentifier::parse("SR-104233").is_ok());
    /// assert!(GuideIdentifier::parse("SR-04233").is_err());
    /// assert!(GuideIdentifier::parse("XX-104233").is_err());
    /// ```
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "guide number".to_string(),
            reason: reason.to_string(),
        };

        let raw = raw.trim();
        let digits = raw
            .strip_prefix(GUIDE_NUMBER_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .ok_or_else(|| invalid("must start with SR-"))?;

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("must end with exactly 6 digits"));
        }

        let number: u32 = digits
            .parse()
            .map_err(|_| invalid("must end with exactly 6 digits"))?;
        if !(GUIDE_NUMBER_MIN..=GUIDE_NUMBER_MAX).contains(&number) {
            return Err(invalid("number is out of range"));
        }

        Ok(GuideIdentifier::from_number(number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric part, e.g. `104233` for `SR-104233`.
    pub fn number(&self) -> u32 {
        self.0
            .get(GUIDE_NUMBER_PREFIX.len() + 1..)
            .and_then(|digits| digits.parse().ok())
            .unwrap_or_default()
    }
}

impl TryFrom<String> for GuideIdentifier {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        GuideIdentifier::parse(&raw)
    }
}

impl fmt::Display for GuideIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Draws a guide identifier from `rng`.
///
/// Each call is independent: there is no counter and no record of earlier
/// draws.
///
/// ## Example
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use shipguide_core::generate_guide_identifier;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let id = generate_guide_identifier(&mut rng);
/// assert!(id.as_str().starts_with("SR-"));
/// assert_eq!(id.as_str().len(), 9);
/// ```
pub fn generate_guide_identifier<R: Rng + ?Sized>(rng: &mut R) -> GuideIdentifier {
    let number = rng.gen_range(GUIDE_NUMBER_MIN..=GUIDE_NUMBER_MAX);
    GuideIdentifier::from_number(number)
}

/// Draws the internal record id (UUID v4) for a guide from `rng`.
///
/// Same generator as the guide number, so a seeded session reproduces both.
pub fn generate_record_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::{mock::StepRng, StdRng};
    use rand::SeedableRng;

    fn assert_well_formed(id: &GuideIdentifier) {
        let s = id.as_str();
        assert_eq!(s.len(), 9, "{s}");
        assert!(s.starts_with("SR-"), "{s}");
        assert!(s[3..].bytes().all(|b| b.is_ascii_digit()), "{s}");
        assert!((GUIDE_NUMBER_MIN..=GUIDE_NUMBER_MAX).contains(&id.number()), "{s}");
    }

    #[test]
    fn test_generated_identifiers_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            assert_well_formed(&generate_guide_identifier(&mut rng));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(2024);
        let mut b = StdRng::seed_from_u64(2024);
        for _ in 0..20 {
            assert_eq!(
                generate_guide_identifier(&mut a),
                generate_guide_identifier(&mut b)
            );
        }
    }

    #[test]
    fn test_draws_depend_only_on_the_generator() {
        // A generator stuck at zero always lands on the low end of the range
        let mut zeros = StepRng::new(0, 0);
        let first = generate_guide_identifier(&mut zeros);
        let second = generate_guide_identifier(&mut zeros);
        assert_eq!(first, second);
        assert_well_formed(&first);
    }

    #[test]
    fn test_record_ids_are_v4_and_seed_driven() {
        let mut a = StdRng::seed_from_u64(8);
        let mut b = StdRng::seed_from_u64(8);

        let first = generate_record_id(&mut a);
        assert_eq!(first.get_version_num(), 4);
        assert_eq!(first, generate_record_id(&mut b));
        assert_ne!(first, generate_record_id(&mut a));
    }

    #[test]
    fn test_random_uses_thread_rng() {
        for _ in 0..100 {
            assert_well_formed(&GuideIdentifier::random());
        }
    }

    #[test]
    fn test_parse() {
        let id = GuideIdentifier::parse("SR-104233").unwrap();
        assert_eq!(id.as_str(), "SR-104233");
        assert_eq!(id.number(), 104233);
        assert_eq!(id.to_string(), "SR-104233");

        assert!(GuideIdentifier::parse(" SR-999999 ").is_ok());
        assert!(GuideIdentifier::parse("SR-100000").is_ok());

        assert!(GuideIdentifier::parse("").is_err());
        assert!(GuideIdentifier::parse("SR-099999").is_err());
        assert!(GuideIdentifier::parse("SR-1234567").is_err());
        assert!(GuideIdentifier::parse("SR-12a456").is_err());
        assert!(GuideIdentifier::parse("SR104233").is_err());
        assert!(GuideIdentifier::parse("sr-104233").is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = GuideIdentifier::parse("SR-555123").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"SR-555123\"");
    }

    #[test]
    fn test_deserialize_checks_format() {
        let id: GuideIdentifier = serde_json::from_str("\"SR-555123\"").unwrap();
        assert_eq!(id.number(), 555123);

        for raw in ["\"hello\"", "\"SR-000001\"", "\"SR-12345\"", "\"\""] {
            assert!(serde_json::from_str::<GuideIdentifier>(raw).is_err(), "{raw}");
        }
    }
}
