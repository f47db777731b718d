//! # Identifier State
//!
//! Owns the random generator guide numbers and record ids are drawn from.
//!
//! Seeded from `ConfigState::rng_seed` when set, so a scripted session can be
//! replayed with the same numbers and ids; otherwise seeded from OS entropy.
//!
//! There is no memory of issued numbers here. Two guides in one session can
//! get the same number; nothing downstream relies on uniqueness.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use shipguide_core::{generate_guide_identifier, generate_record_id, GuideIdentifier};
use uuid::Uuid;

#[derive(Debug)]
pub struct IdentifierState {
    rng: Mutex<StdRng>,
}

impl IdentifierState {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        IdentifierState {
            rng: Mutex::new(rng),
        }
    }

    /// Draws the next guide number.
    pub fn next_identifier(&self) -> GuideIdentifier {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_guide_identifier(&mut *rng)
    }

    /// Draws the next internal record id.
    pub fn next_record_id(&self) -> Uuid {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_record_id(&mut *rng)
    }
}

impl Default for IdentifierState {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_states_agree() {
        let a = IdentifierState::new(Some(11));
        let b = IdentifierState::new(Some(11));
        for _ in 0..10 {
            assert_eq!(a.next_identifier(), b.next_identifier());
            assert_eq!(a.next_record_id(), b.next_record_id());
        }
    }

    #[test]
    fn test_entropy_state_stays_in_format() {
        let state = IdentifierState::default();
        for _ in 0..50 {
            let id = state.next_identifier();
            assert!(GuideIdentifier::parse(id.as_str()).is_ok(), "{id}");
        }
    }
}
