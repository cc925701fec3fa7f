//! Round configuration and the round catalog
//!
//! This module defines the static scoring rules of a game: each round
//! carries the points awarded for a correct answer, the (non-positive)
//! points applied for a wrong answer, and whether negative marking is
//! active at all. The catalog is immutable once built; the game only
//! ever references rounds by index.

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scoring rules for a single round
///
/// Immutable static configuration; never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RoundConfig {
    /// Unique identifier of the round within its catalog
    #[garde(skip)]
    pub id: u32,
    /// Display name of the round
    #[garde(length(max = crate::constants::rounds::MAX_NAME_LENGTH))]
    pub name: String,
    /// Points awarded for a correct answer
    #[garde(range(min = 0))]
    pub correct_points: i64,
    /// Points applied for a wrong answer; zero or negative
    #[garde(range(max = 0))]
    pub wrong_points: i64,
    /// Whether wrong answers deduct points in this round
    #[garde(skip)]
    pub allow_negative: bool,
}

impl RoundConfig {
    /// Whether the deduction value agrees with the negative-marking flag
    ///
    /// A round that disallows negative marking must carry a zero
    /// deduction, so that the wrong-answer affordance is a true no-op.
    pub fn deduction_consistent(&self) -> bool {
        self.allow_negative || self.wrong_points == 0
    }
}

/// Errors that can occur while building a round catalog
#[derive(Error, Debug)]
pub enum Error {
    /// A round violated the field-level bounds
    #[error(transparent)]
    Invalid(#[from] garde::Report),
    /// A round disallows negative marking but still deducts points
    #[error("round {round_id} disallows negative marking but deducts points")]
    InconsistentDeduction {
        /// Identifier of the offending round
        round_id: u32,
    },
}

/// The ordered, immutable list of rounds a game is played through
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoundCatalog {
    /// The round configurations in play order
    #[garde(length(min = 1, max = crate::constants::rounds::MAX_ROUND_COUNT), dive)]
    rounds: Vec<RoundConfig>,
}

impl RoundCatalog {
    /// Builds a catalog from a list of rounds, validating each one
    ///
    /// # Errors
    ///
    /// * `Error::Invalid` - A round failed its field-level bounds, or the
    ///   catalog is empty or too large
    /// * `Error::InconsistentDeduction` - A round disallows negative
    ///   marking but carries a non-zero deduction
    pub fn new(rounds: Vec<RoundConfig>) -> Result<Self, Error> {
        let catalog = Self { rounds };
        catalog.validate()?;
        if let Some(round) = catalog.rounds.iter().find(|r| !r.deduction_consistent()) {
            return Err(Error::InconsistentDeduction { round_id: round.id });
        }
        Ok(catalog)
    }

    /// Returns the round at the given index
    pub fn get(&self, index: usize) -> Option<&RoundConfig> {
        self.rounds.get(index)
    }

    /// Returns the number of rounds in the catalog
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Checks whether the catalog contains no rounds
    ///
    /// Catalogs built through [`RoundCatalog::new`] are never empty.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Returns the index of the final round
    pub fn last_index(&self) -> usize {
        self.rounds.len().saturating_sub(1)
    }
}

impl Default for RoundCatalog {
    /// The built-in five-round catalog
    ///
    /// Three plain rounds at five points apiece, then two negative-marking
    /// rounds at twenty points for a correct answer and a five-point
    /// deduction for a wrong one.
    fn default() -> Self {
        let plain = |id: u32| RoundConfig {
            id,
            name: format!("Round {id}"),
            correct_points: 5,
            wrong_points: 0,
            allow_negative: false,
        };
        Self {
            rounds: vec![
                plain(1),
                plain(2),
                plain(3),
                RoundConfig {
                    id: 4,
                    name: "Round 4 (Negative)".to_owned(),
                    correct_points: 20,
                    wrong_points: -5,
                    allow_negative: true,
                },
                RoundConfig {
                    id: 5,
                    name: "Round 5 (Final Negative)".to_owned(),
                    correct_points: 20,
                    wrong_points: -5,
                    allow_negative: true,
                },
            ],
        }
    }
}
