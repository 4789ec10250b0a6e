//! Game mechanics for Gatorwalk.
//!
//! Provides dice (random and scripted), clamped resource tracks, the
//! player's stat block, and the three-move duel used by encounter scenes.

pub mod dice;
pub mod duel;
pub mod error;
pub mod sheet;

pub use dice::{DiceSource, Die, ScriptedDice};
pub use duel::{Duel, DuelOutcome, DuelSpec, Exchange, MOVES_PER_DUEL, Move};
pub use error::{MechError, MechResult};
pub use sheet::{Stat, StatBlock, Track};
