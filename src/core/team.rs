//! Team identification and per-team data storage.
//!
//! ## TeamIndex
//!
//! Rotation slot of a team within one game, supporting 1-255 teams.
//! Word ownership and pass rotation are computed on these slots.
//!
//! ## TeamMap
//!
//! Per-team storage backed by `Vec` for O(1) access by `TeamIndex`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Rotation slot of a team (0-based, in the order teams were loaded).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamIndex(pub u8);

impl TeamIndex {
    /// Create a new team index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw slot (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The slot that owns the word at `word_index` before any pass.
    ///
    /// ```
    /// use word_quest::core::TeamIndex;
    ///
    /// assert_eq!(TeamIndex::owner_of(0, 4), TeamIndex::new(0));
    /// assert_eq!(TeamIndex::owner_of(5, 4), TeamIndex::new(1));
    /// ```
    #[must_use]
    pub fn owner_of(word_index: usize, team_count: usize) -> Self {
        Self((word_index % team_count) as u8)
    }

    /// The slot after this one, wrapping around.
    #[must_use]
    pub fn next(self, team_count: usize) -> Self {
        Self(((self.index() + 1) % team_count) as u8)
    }
}

impl std::fmt::Display for TeamIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tribe {}", self.0)
    }
}

/// Stable team identity as known by the persistence store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team({})", self.0)
    }
}

/// A tribe taking part in the game. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Display name.
    pub name: String,
    /// Presentation color tag (opaque to the engine).
    pub color: String,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

/// One value per team, indexed by rotation slot.
///
/// ```
/// use word_quest::core::{TeamIndex, TeamMap};
///
/// let mut gold: TeamMap<u32> = TeamMap::with_value(4, 0);
/// assert_eq!(gold.credit(TeamIndex::new(2), 10), 10);
/// assert_eq!(gold.as_slice(), &[0, 0, 10, 0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamMap<T>(Vec<T>);

impl<T: Clone> TeamMap<T> {
    /// `value` for each of `team_count` slots.
    pub fn with_value(team_count: usize, value: T) -> Self {
        Self(vec![value; team_count])
    }
}

impl<T> TeamMap<T> {
    /// Values in slot order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl TeamMap<u32> {
    /// Add gold to a team's total and return the new total. Saturates.
    pub fn credit(&mut self, team: TeamIndex, gold: u32) -> u32 {
        let total = &mut self[team];
        *total = total.saturating_add(gold);
        *total
    }
}

impl<T> Index<TeamIndex> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamIndex) -> &T {
        &self.0[team.index()]
    }
}

impl<T> IndexMut<TeamIndex> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamIndex) -> &mut T {
        &mut self.0[team.index()]
    }
}
