//! Guarded actions.

use super::condition::Condition;
use super::effect::{Effect, apply_all};
use crate::narration::Narration;
use crate::state::GameState;

/// A guard and the effects it unlocks.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    /// Checked when the action runs.
    pub when: Condition,
    /// Applied in order if `when` holds.
    pub then: Vec<Effect>,
}

/// An ordered list of rules. The first rule whose guard holds fires; if
/// none does, the action does nothing.
#[derive(Debug, Clone, Default)]
pub struct Action {
    /// The rules, checked top to bottom.
    pub rules: Vec<Rule>,
}

impl Action {
    /// Create an action with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// An action that always applies `effects`.
    pub fn always(effects: Vec<Effect>) -> Self {
        Self::new().otherwise(effects)
    }

    /// Add a guarded rule.
    pub fn when(mut self, when: Condition, then: Vec<Effect>) -> Self {
        self.rules.push(Rule { when, then });
        self
    }

    /// Add an unguarded fallback rule.
    pub fn otherwise(self, then: Vec<Effect>) -> Self {
        self.when(Condition::Always, then)
    }

    /// Run the action. Returns the scene to move to, if any.
    pub fn run(&self, state: &mut GameState, out: &mut Narration) -> Option<String> {
        let rule = self.rules.iter().find(|r| r.when.evaluate(state))?;
        apply_all(&rule.then, state, out)
    }

    /// Every effect in every rule.
    pub fn effects(&self) -> impl Iterator<Item = &Effect> {
        self.rules.iter().flat_map(|r| r.then.iter())
    }

    /// Every condition in every rule.
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.rules.iter().map(|r| &r.when)
    }

    /// Every scene a rule can move to.
    pub fn targets(&self) -> Vec<&str> {
        self.effects()
            .filter_map(|e| match e {
                Effect::Goto(scene) => Some(scene.as_str()),
                _ => None,
            })
            .collect()
    }
}
