//! Snapshot handed to the presentation layer after every operation.

use im::Vector;
use serde::Serialize;
use smallvec::SmallVec;

use super::timer::ScheduledTransition;
use crate::core::{Phase, Team, TeamIndex};
use crate::store::GameId;

/// One line of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub team: TeamIndex,
    pub name: String,
    pub score: u32,
}

/// Build the leaderboard: descending score, ties in input order.
#[must_use]
pub fn leaderboard(teams: &[Team], scores: &[u32]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<_> = teams
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(i, (team, &score))| LeaderboardEntry {
            team: TeamIndex::new(i as u8),
            name: team.name.clone(),
            score,
        })
        .collect();
    // sort_by is stable
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

/// Renderable view of the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Durable id, if the store registered the game.
    pub game_id: Option<GameId>,
    /// Logical clock.
    pub clock: u64,

    pub teams: Vec<Team>,
    /// Scores in team slot order.
    pub scores: Vec<u32>,
    pub leaderboard: Vec<LeaderboardEntry>,

    pub word_count: usize,
    pub word_index: usize,
    /// Gold the current word pays right now (base or pass bonus).
    pub word_points: u32,

    pub assigned_team: TeamIndex,
    pub current_team: TeamIndex,
    pub attempted_teams: SmallVec<[TeamIndex; 8]>,

    pub guessed_letters: Vector<char>,
    pub revealed_positions: Vector<usize>,
    pub default_revealed_positions: Vec<usize>,
    /// Tiles with `None` for hidden letters.
    pub tiles: Vec<Option<char>>,
    /// Literal word once the phase allows showing it.
    pub revealed_word: Option<String>,

    pub wrong_guess_count: u32,
    pub max_wrong_guesses: u32,
    pub is_passed_question: bool,
    pub phase: Phase,

    pub pending: Option<ScheduledTransition>,
}

impl GameState {
    /// True when the current tribe may guess.
    ///
    /// A locked-out tribe can still pass until its automatic pass fires.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::Playing && self.pending.is_none()
    }
}
