//! A fixed roll sequence for deterministic encounters.

use std::collections::VecDeque;

use super::{DiceSource, Die};
use crate::error::{MechError, MechResult};

/// Dice that return a predetermined sequence of values.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
}

impl ScriptedDice {
    /// Create scripted dice that yield `rolls` in order.
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Number of rolls left in the script.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self, die: Die) -> MechResult<u32> {
        die.validate()?;
        let value = self.rolls.pop_front().ok_or(MechError::ScriptExhausted)?;
        if value == 0 || value > die.sides() {
            return Err(MechError::InvalidRoll { value, die });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_in_order() {
        let mut dice = ScriptedDice::new([3, 1, 6]);
        assert_eq!(dice.roll(Die::D6).unwrap(), 3);
        assert_eq!(dice.roll(Die::D6).unwrap(), 1);
        assert_eq!(dice.remaining(), 1);
        assert_eq!(dice.roll(Die::D6).unwrap(), 6);
    }

    #[test]
    fn exhausted_script_errors() {
        let mut dice = ScriptedDice::new([]);
        assert!(matches!(
            dice.roll(Die::D6),
            Err(MechError::ScriptExhausted)
        ));
    }

    #[test]
    fn value_must_fit_the_die() {
        let mut dice = ScriptedDice::new([7, 0]);
        assert!(matches!(
            dice.roll(Die::D6),
            Err(MechError::InvalidRoll { value: 7, .. })
        ));
        assert!(matches!(
            dice.roll(Die::D6),
            Err(MechError::InvalidRoll { value: 0, .. })
        ));
    }
}
