//! Delayed transitions on a logical clock.
//!
//! The engine never sleeps. It schedules at most one transition with a due
//! time, and the caller advances the clock. Each schedule returns a fresh
//! handle; cancelling with a stale handle is a no-op, so an old transition
//! can never fire into a newer round.

use serde::{Deserialize, Serialize};

/// Handle to a scheduled transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionHandle(pub u64);

impl std::fmt::Display for TransitionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Transition({})", self.0)
    }
}

/// What happens when a transition fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// The guessing tribe ran out of guesses; pass the word on.
    AutoPass,
    /// The word is resolved; move to the next one or finish.
    AdvanceWord,
}

/// A pending transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTransition {
    pub handle: TransitionHandle,
    pub due_at: u64,
    pub kind: TransitionKind,
}

/// Single-slot transition scheduler.
#[derive(Clone, Debug, Default)]
pub struct TransitionTimer {
    pending: Option<ScheduledTransition>,
    next_handle: u64,
}

impl TransitionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire `delay` units after `now`.
    ///
    /// Replaces anything already pending.
    pub fn schedule(&mut self, now: u64, delay: u64, kind: TransitionKind) -> TransitionHandle {
        self.next_handle += 1;
        let handle = TransitionHandle(self.next_handle);
        self.pending = Some(ScheduledTransition {
            handle,
            due_at: now.saturating_add(delay),
            kind,
        });
        handle
    }

    /// Cancel the pending transition if `handle` still refers to it.
    ///
    /// Returns true if something was cancelled.
    pub fn cancel(&mut self, handle: TransitionHandle) -> bool {
        if matches!(self.pending, Some(entry) if entry.handle == handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn pending(&self) -> Option<&ScheduledTransition> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    /// Remove and return the pending transition once it is due at `now`.
    pub fn take_due(&mut self, now: u64) -> Option<ScheduledTransition> {
        if matches!(self.pending, Some(entry) if entry.due_at <= now) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Remove and return the pending transition regardless of its due time.
    pub fn take(&mut self) -> Option<ScheduledTransition> {
        self.pending.take()
    }
}
