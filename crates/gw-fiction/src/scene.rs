//! Scenes and action dispatch.

use crate::choice::{Action, Choice};
use crate::encounter::Encounter;
use crate::narration::Narration;
use crate::state::GameState;

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The scene has no such command.
    Unhandled,
    /// The command ran and the player stays put.
    Stay,
    /// The command wants the player moved to this scene.
    MoveTo(String),
}

/// A named location: description, command table, and optional entry hook
/// and encounter.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Unique name, used as the registry key and transition target.
    pub name: String,
    /// Text shown whenever the scene is rendered.
    pub description: String,
    choices: Vec<(String, Choice)>,
    on_enter: Option<Action>,
    encounter: Option<Encounter>,
    ending: bool,
}

impl Scene {
    /// Create a scene with an empty command table.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            choices: Vec::new(),
            on_enter: None,
            encounter: None,
            ending: false,
        }
    }

    /// Add a command. Commands are stored trimmed and lowercased; adding a
    /// command twice replaces the earlier choice in place.
    pub fn choice(mut self, command: impl Into<String>, choice: Choice) -> Self {
        let command = command.into().trim().to_lowercase();
        if let Some(slot) = self.choices.iter_mut().find(|(c, _)| *c == command) {
            slot.1 = choice;
        } else {
            self.choices.push((command, choice));
        }
        self
    }

    /// Add a command that moves straight to `target`.
    pub fn go(self, command: impl Into<String>, target: impl Into<String>) -> Self {
        self.choice(command, Choice::Transition(target.into()))
    }

    /// Add a command that runs `action`.
    pub fn act(self, command: impl Into<String>, action: Action) -> Self {
        self.choice(command, Choice::Action(action))
    }

    /// Set the entry hook.
    pub fn on_enter(mut self, hook: Action) -> Self {
        self.on_enter = Some(hook);
        self
    }

    /// Attach an encounter, started after the entry hook.
    pub fn encounter(mut self, encounter: Encounter) -> Self {
        self.encounter = Some(encounter);
        self
    }

    /// Mark the scene as an ending.
    pub fn ending(mut self) -> Self {
        self.ending = true;
        self
    }

    /// The command table, in definition order.
    pub fn choices(&self) -> &[(String, Choice)] {
        &self.choices
    }

    /// The commands, in definition order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|(c, _)| c.as_str())
    }

    /// Look up a command.
    pub fn find(&self, command: &str) -> Option<&Choice> {
        self.choices
            .iter()
            .find(|(c, _)| c == command)
            .map(|(_, choice)| choice)
    }

    /// The entry hook, if any.
    pub fn hook(&self) -> Option<&Action> {
        self.on_enter.as_ref()
    }

    /// The encounter, if any.
    pub fn encounter_def(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    /// Returns true for ending scenes.
    pub fn is_ending(&self) -> bool {
        self.ending
    }

    /// Every scene this one can lead to: choices, hook and encounter.
    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = self.choices.iter().flat_map(|(_, c)| c.targets()).collect();
        if let Some(hook) = &self.on_enter {
            targets.extend(hook.targets());
        }
        if let Some(encounter) = &self.encounter {
            targets.extend(encounter.targets());
        }
        targets
    }

    /// Run the command, if the scene has it.
    pub fn perform_action(
        &self,
        command: &str,
        state: &mut GameState,
        out: &mut Narration,
    ) -> Dispatch {
        match self.find(command) {
            None => Dispatch::Unhandled,
            Some(Choice::Transition(target)) => Dispatch::MoveTo(target.clone()),
            Some(Choice::Action(action)) => match action.run(state, out) {
                Some(target) => Dispatch::MoveTo(target),
                None => Dispatch::Stay,
            },
        }
    }

    /// Run the entry hook. Returns a redirect, if the hook asks for one.
    pub fn enter(&self, state: &mut GameState, out: &mut Narration) -> Option<String> {
        self.on_enter.as_ref().and_then(|hook| hook.run(state, out))
    }
}
