//! Narrative events emitted by the engine.
//!
//! Hooks, actions and encounters never print. They push [`Event`]s into a
//! [`Narration`] that the caller renders however it likes.

use gw_mechanics::Exchange;

/// Something the player should be told about.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Story text.
    Text(String),
    /// The player arrived in a scene.
    Entered {
        /// Name of the scene.
        scene: String,
    },
    /// An item was added to the inventory.
    ItemGained(String),
    /// An item was removed from the inventory.
    ItemLost(String),
    /// An inventory listing was requested.
    Inventory {
        /// Line shown above the list.
        heading: String,
        /// The items, in inventory order.
        items: Vec<String>,
    },
    /// One exchange of a duel was fought.
    Exchange(Exchange),
    /// Input during a duel was not one of its moves.
    BadMove {
        /// The story's complaint.
        message: String,
        /// The moves that would have worked.
        moves: Vec<String>,
    },
    /// The command is not in the current scene's table.
    Unhandled {
        /// The normalized command.
        command: String,
        /// The story's complaint.
        message: String,
    },
    /// The player reached an ending scene.
    Ending,
    /// The player quit.
    Farewell(String),
}

/// The events produced by one engine call, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Narration {
    events: Vec<Event>,
}

impl Narration {
    /// Create an empty narration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Append story text. Blank text is dropped.
    pub fn say(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.trim().is_empty() {
            self.events.push(Event::Text(text));
        }
    }

    /// All events, in order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns true if nothing happened worth telling.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Just the story text, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns true if any story text contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Names of the scenes entered, in order.
    pub fn entered(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Entered { scene } => Some(scene.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl IntoIterator for Narration {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a Narration {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
