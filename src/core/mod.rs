//! Core types: teams, words, round state, RNG, configuration.
//!
//! Nothing in here knows about timing or persistence; the engine combines
//! these pieces into a game.

pub mod team;
pub mod word;
pub mod rng;
pub mod config;
pub mod state;

pub use team::{Team, TeamId, TeamIndex, TeamMap};
pub use word::{Word, WordId};
pub use rng::QuestRng;
pub use config::QuestConfig;
pub use state::{Phase, Round};
