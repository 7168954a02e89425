//! Incremental face selection
//!
//! Mirrors how a player traces a word: tap a face to extend the path, tap a
//! face already on the path to back up to it. The helper only enforces path
//! shape; the verifier still has the final say.

use crate::core::{IndexedCubeFace, PlayerIndex, Puzzle};
use crate::rules::{MoveRequest, Rules};
use chrono::{DateTime, Utc};
use std::fmt;

/// Why a tap could not extend the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    NotPlayable(IndexedCubeFace),
    NotTouching {
        last: IndexedCubeFace,
        tapped: IndexedCubeFace,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPlayable(face) => write!(f, "Face {face} cannot be selected"),
            Self::NotTouching { last, tapped } => {
                write!(f, "Face {tapped} does not touch {last}")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// A path of distinct, pairwise-touching faces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    faces: Vec<IndexedCubeFace>,
    rules: Rules,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection that checks playability with custom rules
    #[must_use]
    pub fn with_rules(rules: Rules) -> Self {
        Self {
            faces: Vec::new(),
            rules,
        }
    }

    #[must_use]
    pub fn faces(&self) -> &[IndexedCubeFace] {
        &self.faces
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn clear(&mut self) {
        self.faces.clear();
    }

    /// Letters traced so far
    #[must_use]
    pub fn word(&self, puzzle: &Puzzle) -> String {
        puzzle.string_from(&self.faces)
    }

    /// Tap a face
    ///
    /// A face already on the path truncates the path to end there (tapping
    /// the only selected face clears it). Otherwise the face is appended if
    /// it is playable and touches the current last face.
    ///
    /// # Errors
    /// Returns [`SelectionError`] when the face can neither extend nor
    /// truncate the path. The selection is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use cubeword::core::{IndexedCubeFace, LatticePoint, Puzzle, Side};
    /// use cubeword::selection::Selection;
    ///
    /// let puzzle = Puzzle::uniform("E");
    /// let top = IndexedCubeFace::new(LatticePoint::CENTER, Side::Top);
    /// let left = IndexedCubeFace::new(LatticePoint::CENTER, Side::Left);
    ///
    /// let mut selection = Selection::new();
    /// selection.toggle(top, &puzzle).unwrap();
    /// selection.toggle(left, &puzzle).unwrap();
    /// assert_eq!(selection.len(), 2);
    ///
    /// selection.toggle(top, &puzzle).unwrap();
    /// assert_eq!(selection.faces(), [top]);
    /// ```
    pub fn toggle(&mut self, face: IndexedCubeFace, puzzle: &Puzzle) -> Result<(), SelectionError> {
        if let Some(position) = self.faces.iter().position(|&f| f == face) {
            if position == 0 && self.faces.len() == 1 {
                self.faces.clear();
            } else {
                self.faces.truncate(position + 1);
            }
            return Ok(());
        }

        if !self.rules.face_is_playable(puzzle, face) {
            return Err(SelectionError::NotPlayable(face));
        }
        if let Some(&last) = self.faces.last() {
            if !last.is_touching(face) {
                return Err(SelectionError::NotTouching { last, tapped: face });
            }
        }
        self.faces.push(face);
        Ok(())
    }

    /// Drop the last selected face
    pub fn undo(&mut self) -> Option<IndexedCubeFace> {
        self.faces.pop()
    }

    /// Turn the selection into a played-word request
    #[must_use]
    pub fn into_request(
        self,
        played_at: DateTime<Utc>,
        player_index: Option<PlayerIndex>,
    ) -> MoveRequest {
        MoveRequest::played_word(played_at, player_index, self.faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LatticePoint, MoveType, Side};

    fn face(x: u8, y: u8, z: u8, side: Side) -> IndexedCubeFace {
        IndexedCubeFace::new(LatticePoint::new(x, y, z).unwrap(), side)
    }

    #[test]
    fn extends_along_touching_faces() {
        let puzzle = Puzzle::uniform("E");
        let mut selection = Selection::new();
        for f in [
            face(0, 0, 0, Side::Top),
            face(1, 0, 0, Side::Top),
            face(1, 0, 0, Side::Right),
        ] {
            selection.toggle(f, &puzzle).unwrap();
        }
        assert_eq!(selection.word(&puzzle), "EEE");
    }

    #[test]
    fn rejects_far_faces_without_changing() {
        let puzzle = Puzzle::uniform("E");
        let mut selection = Selection::new();
        let start = face(0, 0, 0, Side::Top);
        let far = face(2, 2, 2, Side::Right);
        selection.toggle(start, &puzzle).unwrap();

        assert_eq!(
            selection.toggle(far, &puzzle),
            Err(SelectionError::NotTouching {
                last: start,
                tapped: far,
            })
        );
        assert_eq!(selection.faces(), [start]);
    }

    #[test]
    fn rejects_removed_cubes() {
        let mut puzzle = Puzzle::uniform("E");
        puzzle.remove_cube(LatticePoint::CENTER);
        let mut selection = Selection::new();
        let target = face(1, 1, 1, Side::Left);
        assert_eq!(
            selection.toggle(target, &puzzle),
            Err(SelectionError::NotPlayable(target))
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn retapping_truncates_and_clears() {
        let puzzle = Puzzle::uniform("E");
        let mut selection = Selection::new();
        let path = [
            face(1, 1, 1, Side::Top),
            face(1, 1, 1, Side::Left),
            face(1, 1, 1, Side::Right),
        ];
        for f in path {
            selection.toggle(f, &puzzle).unwrap();
        }
        selection.toggle(path[1], &puzzle).unwrap();
        assert_eq!(selection.faces(), &path[..2]);

        assert_eq!(selection.undo(), Some(path[1]));
        selection.toggle(path[0], &puzzle).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn into_request_carries_path() {
        let puzzle = Puzzle::uniform("E");
        let mut selection = Selection::new();
        let top = face(1, 1, 1, Side::Top);
        selection.toggle(top, &puzzle).unwrap();

        let request = selection.into_request(Utc::now(), Some(PlayerIndex::First));
        assert_eq!(request.kind, MoveType::PlayedWord(vec![top]));
        assert_eq!(request.player_index, Some(PlayerIndex::First));
    }
}
