//! The record of a single duel exchange.

use crate::sheet::Stat;

/// What happened in one exchange of a duel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// Which exchange this was (1-based).
    pub round: u32,
    /// The move the player used.
    pub command: String,
    /// The stat the move rolled with.
    pub stat: Stat,
    /// The raw die value.
    pub roll: u32,
    /// The stat modifier added to the roll.
    pub modifier: i32,
    /// Roll plus modifier.
    pub total: i32,
    /// The threshold the total was compared against.
    pub threshold: i32,
    /// True if the player landed the move.
    pub hit: bool,
    /// Opponent health after the exchange.
    pub opponent_health: i32,
    /// Player health after the exchange.
    pub player_health: i32,
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.modifier < 0 { '-' } else { '+' };
        write!(
            f,
            "{} {} {} {} = {} vs {}: {}",
            self.command,
            self.roll,
            sign,
            self.modifier.unsigned_abs(),
            self.total,
            self.threshold,
            if self.hit { "hit" } else { "miss" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange(modifier: i32, hit: bool) -> Exchange {
        Exchange {
            round: 1,
            command: "quote saeva".to_string(),
            stat: Stat::Charm,
            roll: 4,
            modifier,
            total: 4 + modifier,
            threshold: 5,
            hit,
            opponent_health: 2,
            player_health: 3,
        }
    }

    #[test]
    fn display_hit() {
        assert_eq!(
            exchange(2, true).to_string(),
            "quote saeva 4 + 2 = 6 vs 5: hit"
        );
    }

    #[test]
    fn display_negative_modifier() {
        assert_eq!(
            exchange(-1, false).to_string(),
            "quote saeva 4 - 1 = 3 vs 5: miss"
        );
    }

    #[test]
    fn display_extreme_modifier() {
        let mut ex = exchange(0, false);
        ex.modifier = i32::MIN;
        assert_eq!(
            ex.to_string(),
            "quote saeva 4 - 2147483648 = 4 vs 5: miss"
        );
    }
}
