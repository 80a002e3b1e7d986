//! Random source for quiz question selection.
//!
//! Quiz play picks one question uniformly from the remaining candidates. The
//! RNG is injected through application state so tests and reproducible runs
//! can fix the seed.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use siphasher::sip::SipHasher24;
use thiserror::Error;

use crate::domain::{CategoryId, QuestionId};

/// Errors raised while reading RNG configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RngConfigError {
    #[error("Invalid RNG_SEED value '{value}': {message}")]
    InvalidSeed { value: String, message: String },
}

// =============================================================================
// RNG Provider
// =============================================================================

/// RNG provider for random or deterministic question selection.
///
/// - **Random mode**: every round draws from an OS-seeded RNG
/// - **Seeded mode**: the RNG for a round is derived from the parent seed and
///   the round's inputs, so the same request always yields the same question
///
/// # Child Seed Derivation
///
/// ```text
/// child_seed = SipHash24(key=[0u8;16], data=parent_seed ++ category ++ previous ids)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RngProvider {
    /// Parent seed for child RNG generation. None = random mode.
    parent_seed: Option<u64>,
}

impl RngProvider {
    /// Creates a new RNG provider in random mode.
    #[must_use]
    pub const fn new_random() -> Self {
        Self { parent_seed: None }
    }

    /// Creates a new RNG provider in seeded mode.
    #[must_use]
    pub const fn new_seeded(seed: u64) -> Self {
        Self {
            parent_seed: Some(seed),
        }
    }

    /// Returns the parent seed, if running in seeded mode.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.parent_seed
    }

    /// Creates a provider from an optional raw `RNG_SEED` value.
    ///
    /// # Errors
    ///
    /// Returns `RngConfigError::InvalidSeed` if the value is not a `u64`.
    pub fn from_seed_value(raw: Option<&str>) -> Result<Self, RngConfigError> {
        let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(Self::new_random());
        };

        value
            .parse::<u64>()
            .map(Self::new_seeded)
            .map_err(|error| RngConfigError::InvalidSeed {
                value: value.to_string(),
                message: error.to_string(),
            })
    }

    /// Creates an RNG scoped to one quiz round.
    #[must_use]
    pub fn for_quiz(&self, category: CategoryId, previous: &[QuestionId]) -> ScopedRng {
        match self.parent_seed {
            Some(parent_seed) => {
                let mut hasher = SipHasher24::new_with_key(&[0u8; 16]);
                hasher.write(&parent_seed.to_le_bytes());
                hasher.write(&category.value().to_le_bytes());
                hasher.write(b":");
                for id in previous {
                    hasher.write(&id.value().to_le_bytes());
                }
                ScopedRng(StdRng::seed_from_u64(hasher.finish()))
            }
            None => ScopedRng(StdRng::from_os_rng()),
        }
    }
}

// =============================================================================
// Scoped RNG
// =============================================================================

/// Round-scoped RNG. `StdRng` is `Send`, so it may be held across awaits.
#[derive(Debug)]
pub struct ScopedRng(StdRng);

impl ScopedRng {
    /// Returns a uniformly chosen index in `0..len`, or `None` when `len` is 0.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.random_range(0..len))
    }

    /// Picks one element of `items` uniformly.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.pick_index(items.len()).map(|index| &items[index])
    }
}

// =============================================================================
// Tests
// =============================================================================
