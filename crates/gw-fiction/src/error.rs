//! Error types for the scene-graph engine.
//!
//! Everything here is an internal error: a story that references scenes it
//! does not define, or dice that misbehave. Player mistakes such as unknown
//! commands are reported as narration events instead.

use gw_mechanics::MechError;
use thiserror::Error;

/// Result type for engine operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while building or playing a story.
#[derive(Debug, Error)]
pub enum FictionError {
    /// A transition named a scene the registry does not contain.
    #[error("scene not found: {0}")]
    UnknownScene(String),

    /// Two scenes were registered under the same name.
    #[error("duplicate scene: {0}")]
    DuplicateScene(String),

    /// A scene points at a target that does not exist.
    #[error("scene '{scene}' leads to unknown scene '{target}'")]
    DanglingTarget {
        /// The scene holding the bad reference.
        scene: String,
        /// The missing target.
        target: String,
    },

    /// A scene's encounter cannot be fought.
    #[error("scene '{scene}' has an invalid encounter: {reason}")]
    InvalidEncounter {
        /// The scene holding the encounter.
        scene: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Entry hooks kept redirecting without settling on a scene.
    #[error("transition loop while entering '{0}'")]
    TransitionLoop(String),

    /// Dice or duel failure.
    #[error("mechanics error: {0}")]
    Mechanics(#[from] MechError),
}
