//! # word-quest
//!
//! Game engine for a turn-based party word-guessing game: tribes take turns
//! uncovering the letters of a sacred word, failed words pass around the
//! table, and solved words pay gold.
//!
//! ## Design Principles
//!
//! 1. **One Engine Instance**: All round and score state lives in a
//!    `QuestEngine`. Every operation returns a fresh `GameState` snapshot.
//!
//! 2. **Explicit Time**: Delayed transitions (auto-pass, next word) are
//!    scheduled on a logical clock and cancelled whenever a new turn begins.
//!
//! 3. **Configuration Over Convention**: Rule constants live in
//!    `QuestConfig`; team rotation works for any team count.
//!
//! 4. **Store Is a Port**: Teams, words and scores go through `QuestStore`.
//!    Failed writes are logged, never fatal.
//!
//! ## Modules
//!
//! - `core`: Teams, words, round state, RNG, configuration
//! - `engine`: The state machine, timer, events and snapshots
//! - `store`: Persistence port and an in-memory implementation
//! - `error`: Setup and store errors

pub mod core;
pub mod engine;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    Phase, QuestConfig, QuestRng, Round, Team, TeamId, TeamIndex, TeamMap, Word, WordId,
};

pub use crate::engine::{
    GameState, LeaderboardEntry, QuestEngine, QuestEvent, ScheduledTransition, TransitionHandle,
    TransitionKind, TransitionTimer,
};

pub use crate::error::{SetupError, StoreError};

pub use crate::store::{GameId, InMemoryStore, QuestStore};
