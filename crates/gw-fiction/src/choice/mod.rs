//! Choices, guarded actions, conditions and effects.
//!
//! A scene's command table maps each command to a [`Choice`]. Plain
//! transitions move the player; actions hold guarded [`Rule`]s that are
//! checked against the state when the command is typed.

mod action;
mod condition;
mod effect;

pub use action::{Action, Rule};
pub use condition::Condition;
pub use effect::Effect;
pub(crate) use effect::apply_all;

/// What a command does.
#[derive(Debug, Clone)]
pub enum Choice {
    /// Move straight to the named scene.
    Transition(String),
    /// Run an action that may change state and may move the player.
    Action(Action),
}

impl Choice {
    /// Every scene this choice can lead to.
    pub fn targets(&self) -> Vec<&str> {
        match self {
            Self::Transition(target) => vec![target.as_str()],
            Self::Action(action) => action.targets(),
        }
    }
}
