//! The player's stat block.
//!
//! Health is a [`Track`]; the three modifiers feed duel moves, one per
//! [`Stat`].

pub mod track;

pub use track::Track;

/// A stat a duel move rolls with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    /// Raw physique: flexing, shoving, lifting.
    Muscle,
    /// Smooth talk and name-dropping.
    Charm,
    /// Bribes, deals and jerky diplomacy.
    Hustle,
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Muscle => write!(f, "muscle"),
            Self::Charm => write!(f, "charm"),
            Self::Hustle => write!(f, "hustle"),
        }
    }
}

/// Numeric stats carried by the player across encounters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatBlock {
    /// The player's health counter.
    pub health: Track,
    /// Modifier for [`Stat::Muscle`] moves.
    pub muscle: i32,
    /// Modifier for [`Stat::Charm`] moves.
    pub charm: i32,
    /// Modifier for [`Stat::Hustle`] moves.
    pub hustle: i32,
}

impl StatBlock {
    /// Create a stat block with the given health and zero modifiers.
    pub fn new(health: i32) -> Self {
        Self {
            health: Track::new("Health", health),
            muscle: 0,
            charm: 0,
            hustle: 0,
        }
    }

    /// Set the muscle modifier.
    pub fn with_muscle(mut self, value: i32) -> Self {
        self.muscle = value;
        self
    }

    /// Set the charm modifier.
    pub fn with_charm(mut self, value: i32) -> Self {
        self.charm = value;
        self
    }

    /// Set the hustle modifier.
    pub fn with_hustle(mut self, value: i32) -> Self {
        self.hustle = value;
        self
    }

    /// The modifier added to rolls made with `stat`.
    pub fn modifier(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Muscle => self.muscle,
            Stat::Charm => self.charm,
            Stat::Hustle => self.hustle,
        }
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::new(3)
    }
}
