//! Word scoring
//!
//! The score curve is a compatibility contract: serialized games store each
//! move's score, and replay re-derives it. The golden values in the tests
//! below pin the curve and must never change.
//!
//! `score = (sum of tile values) × (character count)`, where a `Q` followed by
//! a `U` forms a single `QU` tile with its own value.

use crate::core::{IndexedCubeFace, Puzzle};
use serde::{Deserialize, Serialize};

/// Words shorter than this never score
pub const MIN_SCORING_LENGTH: usize = 3;

/// Per-tile point values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterValues {
    /// Values for `A` through `Z`
    pub letters: [i32; 26],
    /// Value of the two-glyph `QU` tile
    pub qu: i32,
}

impl LetterValues {
    /// Scrabble-style English distribution
    pub const ENGLISH: Self = Self {
        letters: [
            1,  // A
            3,  // B
            3,  // C
            2,  // D
            1,  // E
            4,  // F
            2,  // G
            4,  // H
            1,  // I
            8,  // J
            5,  // K
            1,  // L
            3,  // M
            1,  // N
            1,  // O
            3,  // P
            10, // Q
            1,  // R
            1,  // S
            1,  // T
            1,  // U
            4,  // V
            4,  // W
            8,  // X
            4,  // Y
            10, // Z
        ],
        qu: 10,
    };

    /// Value of a single tile (`"A"`, `"QU"`, ...), case-insensitive
    ///
    /// Unknown tiles are worth nothing.
    #[must_use]
    pub fn value(&self, tile: &str) -> i32 {
        match tile.as_bytes() {
            [single] if single.is_ascii_alphabetic() => {
                self.letters[usize::from(single.to_ascii_uppercase() - b'A')]
            }
            [q, u] if q.eq_ignore_ascii_case(&b'Q') && u.eq_ignore_ascii_case(&b'U') => self.qu,
            _ => 0,
        }
    }

    /// Score a word string
    #[must_use]
    pub fn score(&self, word: &str) -> i32 {
        let length = word.chars().count();
        if length < MIN_SCORING_LENGTH {
            return 0;
        }
        let tile_sum: i32 = tiles(word).map(|tile| self.value(tile)).sum();
        tile_sum * length as i32
    }
}

impl Default for LetterValues {
    fn default() -> Self {
        Self::ENGLISH
    }
}

/// Split a word into tiles, merging `QU` pairs
///
/// # Examples
/// ```
/// use cubeword::scoring::tiles;
///
/// assert_eq!(tiles("QUIZ").collect::<Vec<_>>(), ["QU", "I", "Z"]);
/// assert_eq!(tiles("QAT").collect::<Vec<_>>(), ["Q", "A", "T"]);
/// ```
pub fn tiles(word: &str) -> impl Iterator<Item = &str> {
    let mut rest = word;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let mut end = first.len_utf8();
        if first.eq_ignore_ascii_case(&'Q')
            && rest[end..]
                .chars()
                .next()
                .is_some_and(|next| next.eq_ignore_ascii_case(&'U'))
        {
            end += 1;
        }
        let (tile, tail) = rest.split_at(end);
        rest = tail;
        Some(tile)
    })
}

/// Value of a single tile under the English table
#[must_use]
pub fn letter_value(letter: &str) -> i32 {
    LetterValues::ENGLISH.value(letter)
}

/// Score a word under the English table
///
/// # Examples
/// ```
/// use cubeword::scoring::score;
///
/// assert_eq!(score("CAB"), 21);
/// assert_eq!(score("AB"), 0);
/// ```
#[must_use]
pub fn score(word: &str) -> i32 {
    LetterValues::ENGLISH.score(word)
}

/// Score the word spelled by a face path
#[must_use]
pub fn score_faces(puzzle: &Puzzle, faces: &[IndexedCubeFace]) -> i32 {
    score(&puzzle.string_from(faces))
}

/// Count proper prefixes (length 3 and up) that are words themselves
///
/// Drives presentation feedback while a word is being traced.
///
/// # Examples
/// ```
/// use cubeword::scoring::prefix_bonus_count;
///
/// let words = ["CAR", "CART", "CARTS"];
/// let count = prefix_bonus_count("CARTS", |w| words.contains(&w));
/// assert_eq!(count, 2); // CAR, CART
/// ```
pub fn prefix_bonus_count<F>(word: &str, mut contains: F) -> usize
where
    F: FnMut(&str) -> bool,
{
    word.char_indices()
        .map(|(offset, _)| offset)
        .skip(MIN_SCORING_LENGTH)
        .filter(|&end| contains(&word[..end]))
        .count()
}
