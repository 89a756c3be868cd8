//! Game events.
//!
//! The engine records what happened during each operation so the
//! presentation layer can animate it (flip a tile, shake on a wrong guess,
//! announce gold). Events are drained with
//! [`QuestEngine::drain_events`](super::QuestEngine::drain_events).

use serde::{Deserialize, Serialize};

use crate::core::TeamIndex;

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestEvent {
    /// A correct guess uncovered one tile.
    LetterRevealed {
        team: TeamIndex,
        letter: char,
        position: usize,
    },

    /// The letter is absent or all its tiles were already shown.
    WrongGuess {
        team: TeamIndex,
        letter: char,
        wrong_guesses: u32,
    },

    /// The tribe used its last guess; an automatic pass is scheduled.
    LockedOut { team: TeamIndex },

    /// The word moved on to another tribe.
    TeamPassed { from: TeamIndex, to: TeamIndex },

    /// A tribe completed the word and earned gold.
    WordSolved {
        team: TeamIndex,
        word_index: usize,
        gold: u32,
        total: u32,
    },

    /// Every tribe failed the word.
    WordLost { word_index: usize },

    /// A new word is in play.
    WordAdvanced {
        word_index: usize,
        assigned_team: TeamIndex,
    },

    /// No words remain.
    GameFinished,
}
