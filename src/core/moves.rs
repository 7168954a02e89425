//! Move log
//!
//! `Moves` is the ordered, append-only history of accepted moves. It is the
//! replay and scoring source of truth: totals, per-player splits and the
//! played-word list are all folds over it.

use super::{IndexedCubeFace, LatticePoint, PreconditionError, Puzzle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Seat of a participant in a two-player match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerIndex {
    First = 0,
    Second = 1,
}

impl PlayerIndex {
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The opposing seat
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl TryFrom<u8> for PlayerIndex {
    type Error = PreconditionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::First),
            1 => Ok(Self::Second),
            other => Err(PreconditionError::InvalidPlayerIndex(other)),
        }
    }
}

impl From<PlayerIndex> for u8 {
    fn from(player: PlayerIndex) -> Self {
        player.value()
    }
}

impl fmt::Display for PlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.value() + 1)
    }
}

/// A short reaction (usually an emoji) one player attaches to another's move
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reaction(pub String);

/// What a move did
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveType {
    /// Faces traced in order to spell a word
    PlayedWord(Vec<IndexedCubeFace>),
    /// A spent cube taken out of play
    RemovedCube(LatticePoint),
}

/// One accepted move
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub played_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_index: Option<PlayerIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<BTreeMap<PlayerIndex, Reaction>>,
    pub score: i32,
    #[serde(rename = "type")]
    pub kind: MoveType,
}

impl Move {
    /// Faces of a played word, or `None` for a removal
    #[must_use]
    pub fn played_faces(&self) -> Option<&[IndexedCubeFace]> {
        match &self.kind {
            MoveType::PlayedWord(faces) => Some(faces),
            MoveType::RemovedCube(_) => None,
        }
    }
}

/// A played word with its score and author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedWord {
    pub word: String,
    pub score: i32,
    pub player_index: Option<PlayerIndex>,
}

/// Ordered, append-only history of accepted moves
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Moves(Vec<Move>);

impl Moves {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.0.last()
    }

    pub(crate) fn push(&mut self, played: Move) {
        self.0.push(played);
    }

    /// Sum of every move's score
    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.0.iter().map(|m| m.score).sum()
    }

    /// Sum of scores for moves made by `player`
    #[must_use]
    pub fn score_for(&self, player: PlayerIndex) -> i32 {
        self.0
            .iter()
            .filter(|m| m.player_index == Some(player))
            .map(|m| m.score)
            .sum()
    }

    /// Score split indexed by seat
    #[must_use]
    pub fn player_scores(&self) -> [i32; 2] {
        PlayerIndex::ALL.map(|player| self.score_for(player))
    }

    /// Rendered strings of every played word, in log order
    pub fn played_word_strings<'a>(&'a self, puzzle: &'a Puzzle) -> impl Iterator<Item = String> + 'a {
        self.0
            .iter()
            .filter_map(Move::played_faces)
            .map(|faces| puzzle.string_from(faces))
    }

    /// Whether `word` matches an earlier played word, ignoring ASCII case
    #[must_use]
    pub fn has_played(&self, puzzle: &Puzzle, word: &str) -> bool {
        self.played_word_strings(puzzle)
            .any(|played| played.eq_ignore_ascii_case(word))
    }

    /// Every played word with its score and author
    #[must_use]
    pub fn played_words(&self, puzzle: &Puzzle) -> Vec<PlayedWord> {
        self.0
            .iter()
            .filter_map(|m| {
                m.played_faces().map(|faces| PlayedWord {
                    word: puzzle.string_from(faces),
                    score: m.score,
                    player_index: m.player_index,
                })
            })
            .collect()
    }

    /// Number of played-word moves
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.0.iter().filter(|m| m.played_faces().is_some()).count()
    }

    /// Cubes removed so far, in log order
    pub fn removed_cubes(&self) -> impl Iterator<Item = LatticePoint> + '_ {
        self.0.iter().filter_map(|m| match m.kind {
            MoveType::RemovedCube(point) => Some(point),
            MoveType::PlayedWord(_) => None,
        })
    }

    /// Longest played word (earliest wins ties)
    #[must_use]
    pub fn longest_word(&self, puzzle: &Puzzle) -> Option<PlayedWord> {
        self.played_words(puzzle)
            .into_iter()
            .rev()
            .max_by_key(|w| w.word.chars().count())
    }

    /// Highest-scoring played word (earliest wins ties)
    #[must_use]
    pub fn highest_scoring_word(&self, puzzle: &Puzzle) -> Option<PlayedWord> {
        self.played_words(puzzle)
            .into_iter()
            .rev()
            .max_by_key(|w| w.score)
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
