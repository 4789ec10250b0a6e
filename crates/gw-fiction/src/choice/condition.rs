//! Guards evaluated against session state.

use crate::state::{Flag, GameState};

/// A condition that can be evaluated against the player's state.
#[derive(Debug, Clone, Default)]
pub enum Condition {
    /// Check if a story flag is set.
    Flag(Flag),
    /// Check if the player carries an item.
    HasItem(String),
    /// Logical NOT.
    Not(Box<Condition>),
    /// Logical AND.
    And(Vec<Condition>),
    /// Logical OR.
    Or(Vec<Condition>),
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// Shorthand for [`Condition::HasItem`].
    pub fn has_item(item: impl Into<String>) -> Self {
        Self::HasItem(item.into())
    }

    /// Shorthand for negating a condition.
    pub fn not(inner: Condition) -> Self {
        Self::Not(Box::new(inner))
    }

    /// Evaluate the condition against the current state.
    pub fn evaluate(&self, state: &GameState) -> bool {
        match self {
            Condition::Flag(flag) => state.flags.get(*flag),
            Condition::HasItem(item) => state.has_item(item),
            Condition::Not(inner) => !inner.evaluate(state),
            Condition::And(conditions) => conditions.iter().all(|c| c.evaluate(state)),
            Condition::Or(conditions) => conditions.iter().any(|c| c.evaluate(state)),
            Condition::Always => true,
        }
    }

    /// Item labels this condition checks for, depth first.
    pub fn items(&self) -> Vec<&str> {
        match self {
            Condition::HasItem(item) => vec![item.as_str()],
            Condition::Not(inner) => inner.items(),
            Condition::And(conditions) | Condition::Or(conditions) => {
                conditions.iter().flat_map(Condition::items).collect()
            }
            Condition::Flag(_) | Condition::Always => Vec::new(),
        }
    }
}
