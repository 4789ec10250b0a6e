//! Effects that change session state or narrate.

use crate::narration::{Event, Narration};
use crate::state::{Flag, GameState};

/// A single state change or narrative beat.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Narrate some text.
    Say(String),
    /// Set a story flag.
    Set {
        /// The flag.
        flag: Flag,
        /// Value to set.
        value: bool,
    },
    /// Append an item to the inventory.
    Give(String),
    /// Remove one copy of an item, if carried.
    Take(String),
    /// List the inventory under a heading.
    ShowInventory {
        /// Line shown above the list.
        heading: String,
    },
    /// Refill the player's health.
    RestoreHealth,
    /// Move the player once the effects are applied.
    Goto(String),
}

impl Effect {
    /// Shorthand for [`Effect::Say`].
    pub fn say(text: impl Into<String>) -> Self {
        Self::Say(text.into())
    }

    /// Shorthand for raising a flag.
    pub fn raise(flag: Flag) -> Self {
        Self::Set { flag, value: true }
    }

    /// Shorthand for clearing a flag.
    pub fn clear(flag: Flag) -> Self {
        Self::Set { flag, value: false }
    }

    /// Shorthand for [`Effect::Give`].
    pub fn give(item: impl Into<String>) -> Self {
        Self::Give(item.into())
    }

    /// Shorthand for [`Effect::Take`].
    pub fn take(item: impl Into<String>) -> Self {
        Self::Take(item.into())
    }

    /// Shorthand for [`Effect::Goto`].
    pub fn goto(scene: impl Into<String>) -> Self {
        Self::Goto(scene.into())
    }

    /// Apply the effect. Returns the destination for [`Effect::Goto`].
    pub fn apply(&self, state: &mut GameState, out: &mut Narration) -> Option<String> {
        match self {
            Effect::Say(text) => out.say(text.clone()),
            Effect::Set { flag, value } => state.flags.set(*flag, *value),
            Effect::Give(item) => {
                state.add_item(item.clone());
                out.push(Event::ItemGained(item.clone()));
            }
            Effect::Take(item) => {
                if state.remove_item(item) {
                    out.push(Event::ItemLost(item.clone()));
                }
            }
            Effect::ShowInventory { heading } => out.push(Event::Inventory {
                heading: heading.clone(),
                items: state.inventory.clone(),
            }),
            Effect::RestoreHealth => state.stats.health.restore(),
            Effect::Goto(scene) => return Some(scene.clone()),
        }
        None
    }
}

/// Apply effects in order. The last [`Effect::Goto`] wins.
pub(crate) fn apply_all(
    effects: &[Effect],
    state: &mut GameState,
    out: &mut Narration,
) -> Option<String> {
    effects
        .iter()
        .fold(None, |next, effect| effect.apply(state, out).or(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_mechanics::StatBlock;

    fn state() -> GameState {
        GameState::new("trailer", Vec::new(), StatBlock::new(3))
    }

    #[test]
    fn give_and_take_narrate() {
        let mut state = state();
        let mut out = Narration::new();

        Effect::give("Slim Jims").apply(&mut state, &mut out);
        Effect::take("Slim Jims").apply(&mut state, &mut out);

        assert!(state.inventory.is_empty());
        assert_eq!(
            out.events(),
            &[
                Event::ItemGained("Slim Jims".to_string()),
                Event::ItemLost("Slim Jims".to_string()),
            ]
        );
    }

    #[test]
    fn take_missing_item_is_silent() {
        let mut state = state();
        let mut out = Narration::new();
        Effect::take("Bag of gator jerky").apply(&mut state, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn set_and_clear_flags() {
        let mut state = state();
        let mut out = Narration::new();
        Effect::raise(Flag::ToothOnGround).apply(&mut state, &mut out);
        assert!(state.flags.tooth_on_ground);
        Effect::clear(Flag::ToothOnGround).apply(&mut state, &mut out);
        assert!(!state.flags.tooth_on_ground);
    }

    #[test]
    fn show_inventory_lists_items() {
        let mut state = state();
        state.add_item("Half-empty flask of 'shine");
        let mut out = Narration::new();
        Effect::ShowInventory {
            heading: "Travis checks his pockets:".to_string(),
        }
        .apply(&mut state, &mut out);

        assert_eq!(
            out.events(),
            &[Event::Inventory {
                heading: "Travis checks his pockets:".to_string(),
                items: vec!["Half-empty flask of 'shine".to_string()],
            }]
        );
    }

    #[test]
    fn restore_health_refills() {
        let mut state = state();
        state.stats.health.adjust(-3);
        Effect::RestoreHealth.apply(&mut state, &mut Narration::new());
        assert_eq!(state.stats.health.current, 3);
    }

    #[test]
    fn last_goto_wins() {
        let mut state = state();
        let mut out = Narration::new();
        let next = apply_all(
            &[
                Effect::goto("dirt_road"),
                Effect::say("Travis changes his mind."),
                Effect::goto("gas_station"),
            ],
            &mut state,
            &mut out,
        );
        assert_eq!(next.as_deref(), Some("gas_station"));
        assert_eq!(out.texts(), vec!["Travis changes his mind."]);
    }
}
