//! Scene-graph engine for Gatorwalk.
//!
//! A [`Story`] is a registry of [`Scene`]s plus the starting conditions of a
//! playthrough. A [`Session`] walks the graph: each line of input is looked
//! up in the current scene's command table and either moves the player
//! along a [`Choice::Transition`] or runs a guarded [`Action`]. Scenes can
//! carry an entry hook and a duel or refrain [`Encounter`] that takes over
//! input until it is decided. Everything the player should see comes back
//! as a [`Narration`] of [`Event`]s; nothing is printed here.

/// Static checks over a story graph.
pub mod analysis;
/// Choices, guarded actions, conditions and effects.
pub mod choice;
/// Session configuration.
pub mod config;
/// Encounter definitions and their runtime state.
pub mod encounter;
/// Error types for the engine.
pub mod error;
/// Narrative events emitted by the engine.
pub mod narration;
/// The scene registry.
pub mod registry;
/// Scenes and action dispatch.
pub mod scene;
/// Interactive session management.
pub mod session;
/// Mutable per-session state.
pub mod state;
/// Self-contained story configurations.
pub mod story;

pub use choice::{Action, Choice, Condition, Effect, Rule};
pub use config::SessionConfig;
pub use encounter::{DuelEncounter, Encounter, Refrain};
pub use error::{FictionError, FictionResult};
pub use narration::{Event, Narration};
pub use registry::SceneRegistry;
pub use scene::{Dispatch, Scene};
pub use session::{Session, Status};
pub use state::{Flag, Flags, GameState};
pub use story::{StockLines, Story};
