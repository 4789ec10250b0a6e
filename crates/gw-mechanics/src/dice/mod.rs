//! Dice types and rolling.
//!
//! Rolls go through the [`DiceSource`] trait so encounters can be driven by
//! a seeded [`StdRng`] in play and by [`ScriptedDice`] in tests.

pub mod scripted;

pub use scripted::ScriptedDice;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{MechError, MechResult};

/// A die type. Duels roll a d6 unless told otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Die {
    /// Six-sided die.
    D6,
    /// A die with any number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::Custom(n) => n,
        }
    }

    /// Fails for dice that cannot produce a range (fewer than two sides).
    pub fn validate(self) -> MechResult<()> {
        if self.sides() < 2 {
            return Err(MechError::InvalidDie(self.sides()));
        }
        Ok(())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Anything that can produce a uniform roll for a die.
pub trait DiceSource {
    /// Roll one die, returning a value in `1..=die.sides()`.
    fn roll(&mut self, die: Die) -> MechResult<u32>;
}

impl DiceSource for StdRng {
    fn roll(&mut self, die: Die) -> MechResult<u32> {
        die.validate()?;
        Ok(self.random_range(1..=die.sides()))
    }
}
