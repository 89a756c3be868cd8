//! In-memory store for tests, demos and offline play.

use rustc_hash::FxHashMap;

use super::{GameId, QuestStore};
use crate::core::{Team, TeamId, Word};
use crate::error::StoreError;

/// `QuestStore` backed by hash maps.
///
/// `set_fail_writes(true)` makes every write fail, to exercise the engine's
/// write-failure path.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    teams: Vec<Team>,
    words: Vec<Word>,
    scores: FxHashMap<GameId, FxHashMap<TeamId, u32>>,
    next_game: u64,
    fail_writes: bool,
    write_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_team(mut self, team: Team) -> Self {
        self.teams.push(team);
        self
    }

    #[must_use]
    pub fn with_word(mut self, word: Word) -> Self {
        self.words.push(word);
        self
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Durable score of a team, if recorded.
    #[must_use]
    pub fn score(&self, game: GameId, team: TeamId) -> Option<u32> {
        self.scores.get(&game)?.get(&team).copied()
    }

    /// Number of games created.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.scores.len()
    }

    /// Number of successful score writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes {
            Err(StoreError::WriteRejected("writes disabled".into()))
        } else {
            Ok(())
        }
    }
}

impl QuestStore for InMemoryStore {
    fn load_teams(&mut self) -> Result<Vec<Team>, StoreError> {
        Ok(self.teams.clone())
    }

    fn load_words(&mut self) -> Result<Vec<Word>, StoreError> {
        Ok(self.words.clone())
    }

    fn create_game(&mut self, _teams: &[Team]) -> Result<GameId, StoreError> {
        self.check_writable()?;
        self.next_game += 1;
        let game = GameId(self.next_game);
        self.scores.insert(game, FxHashMap::default());
        Ok(game)
    }

    fn init_scores(&mut self, game: GameId, teams: &[Team]) -> Result<(), StoreError> {
        self.check_writable()?;
        let table = self
            .scores
            .get_mut(&game)
            .ok_or(StoreError::UnknownGame(game.0))?;
        for team in teams {
            table.insert(team.id, 0);
        }
        Ok(())
    }

    fn update_score(&mut self, game: GameId, team: TeamId, total: u32) -> Result<(), StoreError> {
        self.check_writable()?;
        let table = self
            .scores
            .get_mut(&game)
            .ok_or(StoreError::UnknownGame(game.0))?;
        table.insert(team, total);
        self.write_count += 1;
        Ok(())
    }
}
