//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A die with fewer than two sides cannot be rolled.
    #[error("invalid die: d{0}")]
    InvalidDie(u32),

    /// A scripted dice sequence ran out of values.
    #[error("scripted dice exhausted")]
    ScriptExhausted,

    /// A scripted value does not fit on the die it was rolled for.
    #[error("scripted roll {value} does not fit a {die}")]
    InvalidRoll {
        /// The scripted value.
        value: u32,
        /// The die being rolled.
        die: crate::dice::Die,
    },

    /// The command is not one of the duel's moves.
    #[error("unknown move: {0}")]
    UnknownMove(String),

    /// An exchange was attempted after the duel was decided.
    #[error("the duel is already over")]
    DuelOver,

    /// A duel definition is malformed.
    #[error("invalid duel: {0}")]
    InvalidDuel(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
