//! Game engine: the turn-rotation and scoring state machine.
//!
//! ## Rules
//!
//! - Word `i` belongs to tribe `i % team_count`.
//! - A correct guess uncovers the lowest hidden tile of that letter, one per
//!   guess. A letter with nothing left to uncover counts as wrong.
//! - After `max_wrong_guesses` wrong guesses the tribe is locked out and the
//!   word passes automatically after a short delay.
//! - A passed word goes to the next tribe that has not tried it yet and pays
//!   `pass_bonus` instead of its base gold.
//! - When every tribe has failed, the word is shown and the game moves on.
//!
//! ## Timing
//!
//! Delayed transitions live on a logical clock (see [`timer`]). The caller
//! drives the clock with [`QuestEngine::advance_time`].

mod event;
mod game;
pub mod timer;
mod view;

pub use event::QuestEvent;
pub use game::QuestEngine;
pub use timer::{ScheduledTransition, TransitionHandle, TransitionKind, TransitionTimer};
pub use view::{leaderboard, GameState, LeaderboardEntry};
