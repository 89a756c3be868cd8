//! Per-word round state.
//!
//! ## Round
//!
//! Everything that changes while one word is in play:
//! - Which tribe owns the word and which tribe is guessing
//! - Tribes that already had their turn on it
//! - Guess log, revealed tiles, free hint tiles
//! - Wrong-guess count and phase
//!
//! Uses `im` and `smallvec` so a round clones cheaply into every snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::team::TeamIndex;
use super::word::Word;

/// Phase of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// A tribe is guessing letters.
    Playing,
    /// The word was completed; waiting for the next word.
    Won,
    /// Every tribe failed; the word is shown to everyone.
    Lost,
    /// No words remain. Terminal.
    Finished,
}

impl Phase {
    /// True once the word's text may be shown to all players.
    #[must_use]
    pub fn reveals_word(self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

/// Mutable state of the word currently in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Position in the word sequence.
    pub word_index: usize,

    /// Tribe that owns this word by rotation.
    pub assigned_team: TeamIndex,

    /// Tribe currently guessing.
    pub current_team: TeamIndex,

    /// Tribes whose turn on this word has ended, in attempt order.
    pub attempted_teams: SmallVec<[TeamIndex; 8]>,

    /// Every guess of the current turn, duplicates included.
    pub guessed_letters: Vector<char>,

    /// Tiles uncovered by correct guesses this turn, in reveal order.
    pub revealed_positions: Vector<usize>,

    /// Free hint tiles, fixed for the whole word.
    pub default_revealed_positions: Vec<usize>,

    /// Wrong guesses this turn.
    pub wrong_guess_count: u32,

    /// Set once the word left its assigned tribe.
    pub is_passed_question: bool,

    pub phase: Phase,
}

impl Round {
    /// Open a word for its assigned tribe.
    #[must_use]
    pub fn new(word_index: usize, team_count: usize, hints: Vec<usize>) -> Self {
        let assigned = TeamIndex::owner_of(word_index, team_count);
        Self {
            word_index,
            assigned_team: assigned,
            current_team: assigned,
            attempted_teams: SmallVec::new(),
            guessed_letters: Vector::new(),
            revealed_positions: Vector::new(),
            default_revealed_positions: hints,
            wrong_guess_count: 0,
            is_passed_question: false,
            phase: Phase::Playing,
        }
    }

    /// Clear per-turn progress. Hint tiles stay.
    pub fn reset_turn(&mut self) {
        self.guessed_letters.clear();
        self.revealed_positions.clear();
        self.wrong_guess_count = 0;
        self.phase = Phase::Playing;
    }

    /// True if the tile is visible, either revealed or a hint.
    #[must_use]
    pub fn is_shown(&self, position: usize) -> bool {
        self.revealed_positions.contains(&position)
            || self.default_revealed_positions.contains(&position)
    }

    /// True if every tile of a word of `len` letters is visible.
    #[must_use]
    pub fn is_complete(&self, len: usize) -> bool {
        (0..len).all(|p| self.is_shown(p))
    }

    #[must_use]
    pub fn has_attempted(&self, team: TeamIndex) -> bool {
        self.attempted_teams.contains(&team)
    }

    /// Record that a tribe's turn ended.
    pub fn mark_attempted(&mut self, team: TeamIndex) {
        if !self.has_attempted(team) {
            self.attempted_teams.push(team);
        }
    }

    /// Next tribe after the current one that has not yet attempted the word.
    ///
    /// Returns `None` when every tribe has attempted it.
    #[must_use]
    pub fn next_unattempted(&self, team_count: usize) -> Option<TeamIndex> {
        let mut candidate = self.current_team.next(team_count);
        for _ in 0..team_count {
            if !self.has_attempted(candidate) {
                return Some(candidate);
            }
            candidate = candidate.next(team_count);
        }
        None
    }

    /// Tiles as the players see them: `Some(letter)` when shown.
    ///
    /// When the phase reveals the word, every tile is shown.
    #[must_use]
    pub fn display(&self, word: &Word) -> Vec<Option<char>> {
        word.text
            .chars()
            .enumerate()
            .map(|(i, c)| (self.phase.reveals_word() || self.is_shown(i)).then_some(c))
            .collect()
    }
}
