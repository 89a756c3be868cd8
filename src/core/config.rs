//! Game configuration.
//!
//! One `QuestConfig` covers every rule constant of the game. Two variants of
//! the party game differed only in the hint cap; here that is just
//! `hint_reveal_cap`.
//!
//! Delays are expressed in abstract time units. The presentation layer
//! decides how long a unit lasts and feeds elapsed units to
//! [`QuestEngine::advance_time`](crate::engine::QuestEngine::advance_time).

use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Complete rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestConfig {
    /// Wrong guesses before a tribe is locked out and auto-passes.
    pub max_wrong_guesses: u32,

    /// Upper bound on free hint tiles per word.
    pub hint_reveal_cap: usize,

    /// Share of the word (in percent, rounded down) shown as hint tiles.
    pub hint_reveal_percent: usize,

    /// Gold paid for solving a word that was passed to the solving tribe.
    pub pass_bonus: u32,

    /// Delay between a lockout and the automatic pass.
    pub auto_pass_delay: u64,

    /// Delay between a solved word and the next word.
    pub win_delay: u64,

    /// Delay between a lost word (shown to everyone) and the next word.
    pub loss_delay: u64,
}

impl Default for QuestConfig {
    fn default() -> Self {
        Self {
            max_wrong_guesses: 4,
            hint_reveal_cap: 4,
            hint_reveal_percent: 30,
            pass_bonus: 5,
            auto_pass_delay: 2,
            win_delay: 2,
            loss_delay: 3,
        }
    }
}

impl QuestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_wrong_guesses(mut self, max: u32) -> Self {
        self.max_wrong_guesses = max;
        self
    }

    #[must_use]
    pub fn with_hint_reveal_cap(mut self, cap: usize) -> Self {
        self.hint_reveal_cap = cap;
        self
    }

    #[must_use]
    pub fn with_hint_reveal_percent(mut self, percent: usize) -> Self {
        self.hint_reveal_percent = percent;
        self
    }

    #[must_use]
    pub fn with_pass_bonus(mut self, bonus: u32) -> Self {
        self.pass_bonus = bonus;
        self
    }

    /// Set all three transition delays at once.
    #[must_use]
    pub fn with_delays(mut self, auto_pass: u64, win: u64, loss: u64) -> Self {
        self.auto_pass_delay = auto_pass;
        self.win_delay = win;
        self.loss_delay = loss;
        self
    }

    /// Number of free hint tiles for a word of `len` letters.
    ///
    /// ```
    /// use word_quest::core::QuestConfig;
    ///
    /// let config = QuestConfig::default();
    /// assert_eq!(config.hint_count(3), 0);
    /// assert_eq!(config.hint_count(10), 3);
    /// assert_eq!(config.hint_count(20), 4);
    /// ```
    #[must_use]
    pub fn hint_count(&self, len: usize) -> usize {
        (len * self.hint_reveal_percent / 100).min(self.hint_reveal_cap)
    }

    /// Reject configurations the rules cannot run with.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.max_wrong_guesses == 0 {
            return Err(SetupError::InvalidConfig(
                "max_wrong_guesses must be at least 1".into(),
            ));
        }
        // At 100% a word would start fully shown and could never be solved
        if self.hint_reveal_percent >= 100 {
            return Err(SetupError::InvalidConfig(format!(
                "hint_reveal_percent must be below 100, got {}",
                self.hint_reveal_percent
            )));
        }
        Ok(())
    }
}
