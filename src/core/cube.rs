//! Letter cubes
//!
//! A cube carries one letter tile on each visible face plus a per-face use
//! count. Removal is one-way: once `was_removed` is set it is never cleared.

use super::Side;
use serde::{Deserialize, Serialize};

/// Longest tile, in glyphs (`QU`)
pub const MAX_LETTER_LEN: usize = 2;

/// Check that a tile is 1-2 uppercase ASCII letters
///
/// # Examples
/// ```
/// use cubeword::core::is_valid_letter;
///
/// assert!(is_valid_letter("A"));
/// assert!(is_valid_letter("QU"));
/// assert!(!is_valid_letter("a"));
/// assert!(!is_valid_letter("QUA"));
/// assert!(!is_valid_letter(""));
/// ```
#[must_use]
pub fn is_valid_letter(letter: &str) -> bool {
    (1..=MAX_LETTER_LEN).contains(&letter.len()) && letter.bytes().all(|b| b.is_ascii_uppercase())
}

/// One visible face of a cube
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeFace {
    pub letter: String,
    pub use_count: u32,
}

impl CubeFace {
    /// Create an unused face, normalizing the tile to uppercase
    ///
    /// The tile is not validated here; see [`is_valid_letter`].
    #[must_use]
    pub fn new(letter: impl Into<String>) -> Self {
        Self {
            letter: letter.into().to_ascii_uppercase(),
            use_count: 0,
        }
    }
}

/// A cube at one lattice position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cube {
    pub top: CubeFace,
    pub left: CubeFace,
    pub right: CubeFace,
    pub was_removed: bool,
}

impl Cube {
    /// A fresh cube with the given tiles
    #[must_use]
    pub fn new(top: impl Into<String>, left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            top: CubeFace::new(top),
            left: CubeFace::new(left),
            right: CubeFace::new(right),
            was_removed: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn face(&self, side: Side) -> &CubeFace {
        match side {
            Side::Top => &self.top,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    #[inline]
    pub(crate) const fn face_mut(&mut self, side: Side) -> &mut CubeFace {
        match side {
            Side::Top => &mut self.top,
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Faces in storage order (top, left, right)
    pub fn faces(&self) -> impl Iterator<Item = (Side, &CubeFace)> {
        Side::ALL.into_iter().map(|side| (side, self.face(side)))
    }

    #[inline]
    #[must_use]
    pub const fn is_in_play(&self) -> bool {
        !self.was_removed
    }

    /// Whether every face has been used at least `threshold` times
    #[must_use]
    pub const fn meets_removal_threshold(&self, threshold: u32) -> bool {
        self.top.use_count >= threshold
            && self.left.use_count >= threshold
            && self.right.use_count >= threshold
    }
}
