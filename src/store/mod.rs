//! Persistence port.
//!
//! The engine reads teams and words through a `QuestStore` and writes score
//! totals back to it. In-memory engine state stays authoritative: writes are
//! fire-and-forget from the engine's point of view.
//!
//! ## Example Usage
//!
//! ```
//! use word_quest::core::{Team, TeamId, Word, WordId};
//! use word_quest::store::{InMemoryStore, QuestStore};
//!
//! let mut store = InMemoryStore::new()
//!     .with_team(Team::new(TeamId::new(1), "Eagles", "red"))
//!     .with_word(Word::new(WordId::new(1), "TOTEM", 10));
//!
//! let teams = store.load_teams().unwrap();
//! let game = store.create_game(&teams).unwrap();
//! store.init_scores(game, &teams).unwrap();
//! store.update_score(game, TeamId::new(1), 10).unwrap();
//! assert_eq!(store.score(game, TeamId::new(1)), Some(10));
//! ```

mod memory;

pub use memory::InMemoryStore;

use serde::{Deserialize, Serialize};

use crate::core::{Team, TeamId, Word};
use crate::error::StoreError;

/// Durable game identifier handed out by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Storage backend for teams, words and running scores.
pub trait QuestStore {
    /// All teams, in rotation order.
    fn load_teams(&mut self) -> Result<Vec<Team>, StoreError>;

    /// All words, in creation order.
    fn load_words(&mut self) -> Result<Vec<Word>, StoreError>;

    /// Register a new game for these teams.
    fn create_game(&mut self, teams: &[Team]) -> Result<GameId, StoreError>;

    /// Set every team's durable score to zero.
    fn init_scores(&mut self, game: GameId, teams: &[Team]) -> Result<(), StoreError>;

    /// Overwrite a team's durable total.
    fn update_score(&mut self, game: GameId, team: TeamId, total: u32) -> Result<(), StoreError>;
}
