//! Quest words: the hidden words teams try to uncover.

use serde::{Deserialize, Serialize};

/// Word identity as known by the persistence store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordId(pub u32);

impl WordId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word({})", self.0)
    }
}

/// A sacred word and the gold it pays when solved by its assigned tribe.
///
/// Text is stored uppercase. Words are immutable once a game starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub points: u32,
}

impl Word {
    /// Create a word, normalizing its text to uppercase.
    pub fn new(id: WordId, text: impl AsRef<str>, points: u32) -> Self {
        Self {
            id,
            text: text.as_ref().to_ascii_uppercase(),
            points,
        }
    }

    /// True if the text is non-empty and made only of `A-Z`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.text.is_empty() && self.text.bytes().all(|b| b.is_ascii_uppercase())
    }

    /// Number of letter tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letter at a tile position.
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.text.as_bytes().get(position).map(|&b| b as char)
    }

    /// Every position holding `letter`, ascending.
    pub fn positions_of(&self, letter: char) -> impl Iterator<Item = usize> + '_ {
        self.text
            .char_indices()
            .filter(move |&(_, c)| c == letter)
            .map(|(i, _)| i)
    }
}
