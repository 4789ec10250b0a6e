//! The stories that ship with Gatorwalk.
//!
//! Each revision of Travis's morning is its own [`Story`] on the same
//! engine. [`STORIES`] lists them for the CLI.

mod fill_er_up;
mod first_light;
mod swamp;

use gw_fiction::{FictionResult, Story};

pub use fill_er_up::fill_er_up;
pub use first_light::first_light;

/// A named story the CLI can load.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    /// Name used on the command line.
    pub name: &'static str,
    /// One-line summary.
    pub summary: &'static str,
    /// Builds a fresh copy of the story.
    pub build: fn() -> FictionResult<Story>,
}

/// Story played when none is named.
pub const DEFAULT_STORY: &str = "fill-er-up";

/// Every shipped story, oldest first.
pub const STORIES: &[Entry] = &[
    Entry {
        name: "first-light",
        summary: "Two rooms and a dirt road",
        build: first_light,
    },
    Entry {
        name: "fill-er-up",
        summary: "Gas station, strip club, Mole Cricket and the Toadies",
        build: fill_er_up,
    },
];

/// Look a story up by name.
pub fn find(name: &str) -> Option<&'static Entry> {
    STORIES.iter().find(|e| e.name == name)
}

/// Names of every shipped story.
pub fn names() -> Vec<&'static str> {
    STORIES.iter().map(|e| e.name).collect()
}
