//! Three-move duels.
//!
//! A duel pits the player's [`StatBlock`] against an opponent's health
//! counter. Each exchange rolls one die, adds the chosen move's stat
//! modifier and compares the total against a threshold: at or above is a
//! hit on the opponent, below is a hit on the player.

pub mod exchange;

pub use exchange::Exchange;

use tracing::trace;

use crate::dice::{DiceSource, Die};
use crate::error::{MechError, MechResult};
use crate::sheet::{Stat, StatBlock, Track};

/// Every duel offers exactly this many moves.
pub const MOVES_PER_DUEL: usize = 3;

/// A labeled move the player can make in a duel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// The lowercase command that selects this move.
    pub command: String,
    /// The stat the move rolls with.
    pub stat: Stat,
}

impl Move {
    /// Create a move. The command is normalized to lowercase.
    pub fn new(command: impl Into<String>, stat: Stat) -> Self {
        Self {
            command: command.into().trim().to_lowercase(),
            stat,
        }
    }
}

/// The fixed parameters of a duel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelSpec {
    /// Display name of the opponent.
    pub opponent: String,
    /// Opponent starting health.
    pub opponent_health: i32,
    /// The die rolled each exchange.
    pub die: Die,
    /// Minimum total that counts as a hit.
    pub threshold: i32,
    /// Health lost by whichever side is hit.
    pub damage: i32,
    /// The move vocabulary.
    pub moves: Vec<Move>,
}

impl DuelSpec {
    /// Create a duel against `opponent` with a d6, threshold 4 and 1 damage.
    pub fn new(opponent: impl Into<String>, opponent_health: i32) -> Self {
        Self {
            opponent: opponent.into(),
            opponent_health,
            die: Die::D6,
            threshold: 4,
            damage: 1,
            moves: Vec::new(),
        }
    }

    /// Set the die.
    pub fn with_die(mut self, die: Die) -> Self {
        self.die = die;
        self
    }

    /// Set the hit threshold.
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the damage per hit.
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    /// Add a move to the vocabulary.
    pub fn with_move(mut self, command: impl Into<String>, stat: Stat) -> Self {
        self.moves.push(Move::new(command, stat));
        self
    }

    /// Look up a move by its (already normalized) command.
    pub fn find_move(&self, command: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.command == command)
    }

    /// The move commands, in definition order.
    pub fn move_commands(&self) -> Vec<&str> {
        self.moves.iter().map(|m| m.command.as_str()).collect()
    }

    /// Check that the duel can actually be fought.
    pub fn validate(&self) -> MechResult<()> {
        self.die.validate()?;
        if self.opponent_health <= 0 {
            return Err(MechError::InvalidDuel(format!(
                "{} starts with no health",
                self.opponent
            )));
        }
        if self.damage <= 0 {
            return Err(MechError::InvalidDuel(format!(
                "damage against {} must be positive",
                self.opponent
            )));
        }
        if self.moves.len() != MOVES_PER_DUEL {
            return Err(MechError::InvalidDuel(format!(
                "{} moves against {}, expected {MOVES_PER_DUEL}",
                self.moves.len(),
                self.opponent
            )));
        }
        for (i, m) in self.moves.iter().enumerate() {
            if self.moves[..i].iter().any(|other| other.command == m.command) {
                return Err(MechError::InvalidDuel(format!(
                    "duplicate move '{}'",
                    m.command
                )));
            }
        }
        Ok(())
    }
}

/// How a finished duel ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelOutcome {
    /// The opponent ran out of health.
    Victory,
    /// The player ran out of health.
    Defeat,
}

/// A duel in progress.
#[derive(Debug, Clone)]
pub struct Duel {
    spec: DuelSpec,
    opponent: Track,
    round: u32,
    /// Every exchange so far, in order.
    pub log: Vec<Exchange>,
}

impl Duel {
    /// Start a duel from its spec.
    pub fn new(spec: DuelSpec) -> Self {
        let opponent = Track::new(spec.opponent.clone(), spec.opponent_health);
        Self {
            spec,
            opponent,
            round: 0,
            log: Vec::new(),
        }
    }

    /// The duel's parameters.
    pub fn spec(&self) -> &DuelSpec {
        &self.spec
    }

    /// The opponent's health counter.
    pub fn opponent(&self) -> &Track {
        &self.opponent
    }

    /// Number of exchanges fought.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The outcome, once either side is out of health.
    pub fn outcome(&self, stats: &StatBlock) -> Option<DuelOutcome> {
        if self.opponent.is_empty() {
            Some(DuelOutcome::Victory)
        } else if stats.health.is_empty() {
            Some(DuelOutcome::Defeat)
        } else {
            None
        }
    }

    /// Fight one exchange with the move selected by `command`.
    pub fn exchange(
        &mut self,
        command: &str,
        stats: &mut StatBlock,
        dice: &mut dyn DiceSource,
    ) -> MechResult<Exchange> {
        if self.outcome(stats).is_some() {
            return Err(MechError::DuelOver);
        }
        let stat = self
            .spec
            .find_move(command)
            .map(|m| m.stat)
            .ok_or_else(|| MechError::UnknownMove(command.to_string()))?;

        let roll = dice.roll(self.spec.die)?;
        let modifier = stats.modifier(stat);
        let total = i32::try_from(roll)
            .unwrap_or(i32::MAX)
            .saturating_add(modifier);
        let hit = total >= self.spec.threshold;
        if hit {
            self.opponent.adjust(self.spec.damage.saturating_neg());
        } else {
            stats.health.adjust(self.spec.damage.saturating_neg());
        }
        self.round += 1;

        let exchange = Exchange {
            round: self.round,
            command: command.to_string(),
            stat,
            roll,
            modifier,
            total,
            threshold: self.spec.threshold,
            hit,
            opponent_health: self.opponent.current,
            player_health: stats.health.current,
        };
        trace!(opponent = %self.spec.opponent, %exchange, "duel exchange");
        self.log.push(exchange.clone());
        Ok(exchange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn mole_cricket() -> DuelSpec {
        DuelSpec::new("Mole Cricket", 3)
            .with_threshold(5)
            .with_move("flex lat spread", Stat::Muscle)
            .with_move("quote saeva", Stat::Charm)
            .with_move("offer jerky", Stat::Hustle)
    }

    fn travis() -> StatBlock {
        StatBlock::new(3).with_muscle(1).with_charm(2)
    }

    #[test]
    fn spec_validation() {
        assert!(mole_cricket().validate().is_ok());
        assert!(DuelSpec::new("Nobody", 0).validate().is_err());
        assert!(DuelSpec::new("Moveless", 2).validate().is_err());
        assert!(mole_cricket().with_damage(0).validate().is_err());

        let duplicate = DuelSpec::new("Possum", 2)
            .with_move("hiss", Stat::Charm)
            .with_move("  HISS", Stat::Muscle)
            .with_move("bribe", Stat::Hustle);
        assert!(matches!(
            duplicate.validate(),
            Err(MechError::InvalidDuel(reason)) if reason.contains("duplicate")
        ));
    }

    #[test]
    fn duels_need_three_moves() {
        let two = DuelSpec::new("Possum", 2)
            .with_move("hiss", Stat::Charm)
            .with_move("swat", Stat::Muscle);
        assert!(matches!(two.validate(), Err(MechError::InvalidDuel(_))));

        let four = mole_cricket().with_move("bite lip", Stat::Charm);
        assert!(matches!(four.validate(), Err(MechError::InvalidDuel(_))));
    }

    #[test]
    fn moves_are_normalized() {
        let spec = DuelSpec::new("Mole Cricket", 3)
            .with_move("flex lat spread", Stat::Muscle)
            .with_move("  Bite LIP ", Stat::Charm)
            .with_move("offer jerky", Stat::Hustle);
        assert!(spec.validate().is_ok());
        assert!(spec.find_move("bite lip").is_some());
        assert_eq!(
            spec.move_commands(),
            vec!["flex lat spread", "bite lip", "offer jerky"]
        );
    }

    #[test]
    fn extreme_damage_stays_in_bounds() {
        let mut duel = Duel::new(mole_cricket().with_damage(i32::MIN));
        let mut stats = travis();
        let mut dice = ScriptedDice::new([6, 1]);

        duel.exchange("quote saeva", &mut stats, &mut dice).unwrap();
        duel.exchange("offer jerky", &mut stats, &mut dice).unwrap();
        assert!((0..=3).contains(&duel.opponent().current));
        assert!((0..=3).contains(&stats.health.current));
    }

    #[test]
    fn hit_damages_opponent() {
        let mut duel = Duel::new(mole_cricket());
        let mut stats = travis();
        let mut dice = ScriptedDice::new([3]);

        let ex = duel.exchange("quote saeva", &mut stats, &mut dice).unwrap();
        assert!(ex.hit);
        assert_eq!(ex.total, 5);
        assert_eq!(duel.opponent().current, 2);
        assert_eq!(stats.health.current, 3);
    }

    #[test]
    fn miss_damages_player() {
        let mut duel = Duel::new(mole_cricket());
        let mut stats = travis();
        let mut dice = ScriptedDice::new([3]);

        let ex = duel.exchange("offer jerky", &mut stats, &mut dice).unwrap();
        assert!(!ex.hit);
        assert_eq!(duel.opponent().current, 3);
        assert_eq!(stats.health.current, 2);
    }

    #[test]
    fn scripted_duel_ends_in_victory() {
        let mut duel = Duel::new(mole_cricket());
        let mut stats = travis();
        let mut dice = ScriptedDice::new([5, 1, 3, 6]);

        for _ in 0..4 {
            assert!(duel.outcome(&stats).is_none());
            duel.exchange("quote saeva", &mut stats, &mut dice).unwrap();
        }
        assert_eq!(duel.outcome(&stats), Some(DuelOutcome::Victory));
        assert_eq!(duel.opponent().current, 0);
        assert_eq!(stats.health.current, 2);
        assert_eq!(duel.round(), 4);
        assert_eq!(duel.log.len(), 4);
        assert!(matches!(
            duel.exchange("quote saeva", &mut stats, &mut dice),
            Err(MechError::DuelOver)
        ));
    }

    #[test]
    fn scripted_duel_ends_in_defeat() {
        let mut duel = Duel::new(mole_cricket());
        let mut stats = travis();
        let mut dice = ScriptedDice::new([1, 1, 1]);

        for _ in 0..3 {
            duel.exchange("flex lat spread", &mut stats, &mut dice)
                .unwrap();
        }
        assert_eq!(duel.outcome(&stats), Some(DuelOutcome::Defeat));
        assert!(stats.health.is_empty());
    }

    #[test]
    fn unknown_move_consumes_nothing() {
        let mut duel = Duel::new(mole_cricket());
        let mut stats = travis();
        let mut dice = ScriptedDice::new([6]);

        assert!(matches!(
            duel.exchange("run", &mut stats, &mut dice),
            Err(MechError::UnknownMove(_))
        ));
        assert_eq!(dice.remaining(), 1);
        assert_eq!(duel.round(), 0);
    }

    #[test]
    fn exhausted_player_loses_immediately() {
        let duel = Duel::new(mole_cricket());
        let mut stats = travis();
        stats.health.adjust(-10);
        assert_eq!(duel.outcome(&stats), Some(DuelOutcome::Defeat));
    }
}
