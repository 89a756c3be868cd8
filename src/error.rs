//! Error types.
//!
//! Only starting a game can fail. Once a game is running, rule violations
//! (guessing out of turn, non-letters) are no-ops, and persistence write
//! failures are logged rather than surfaced.

use thiserror::Error;

/// Failure reported by a persistence store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("unknown game {0}")]
    UnknownGame(u64),

    #[error("write rejected: {0}")]
    WriteRejected(String),
}

/// A game could not be started. The caller must not proceed to play.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("no teams to play with")]
    NoTeams,

    #[error("no words to play with")]
    NoWords,

    #[error("at most 255 teams supported, got {0}")]
    TooManyTeams(usize),

    #[error("word {index} ({text:?}) must be non-empty and alphabetic")]
    InvalidWord { index: usize, text: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to load game data")]
    Load(#[from] StoreError),
}
