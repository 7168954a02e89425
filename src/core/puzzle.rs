//! The mutable cube grid
//!
//! `Puzzle` owns every face's letter and use count and every cube's removal
//! flag. Letters are fixed once the puzzle is built; the verifier is the only
//! code path that bumps use counts or removes cubes.

use super::{CUBE_COUNT, Cube, IndexedCubeFace, LatticePoint, Side, is_valid_letter};
use crate::snapshot::{PuzzleSnapshot, SnapshotError};
use serde::Deserialize;
use std::array;

/// A 3x3x3 grid of letter cubes, stored in x-major flat order
///
/// The builders take tiles as given. A tile that is not 1-2 uppercase ASCII
/// letters is caught by [`Puzzle::validate`], which serialization runs first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "PuzzleSnapshot")]
pub struct Puzzle {
    cubes: [Cube; CUBE_COUNT],
}

impl Puzzle {
    /// Build a puzzle by asking for the tile of every face
    ///
    /// # Examples
    /// ```
    /// use cubeword::core::{Puzzle, Side};
    ///
    /// let puzzle = Puzzle::from_fn(|face| match face.side {
    ///     Side::Top => "T",
    ///     Side::Left => "L",
    ///     Side::Right => "R",
    /// });
    /// assert_eq!(puzzle.in_play_count(), 27);
    /// ```
    pub fn from_fn<F, S>(mut letter_for: F) -> Self
    where
        F: FnMut(IndexedCubeFace) -> S,
        S: Into<String>,
    {
        let cubes = array::from_fn(|flat| {
            let point = LatticePoint::from_flat(flat).unwrap_or(LatticePoint::CENTER);
            Cube::new(
                letter_for(IndexedCubeFace::new(point, Side::Top)),
                letter_for(IndexedCubeFace::new(point, Side::Left)),
                letter_for(IndexedCubeFace::new(point, Side::Right)),
            )
        });
        Self { cubes }
    }

    /// A puzzle with the same tile on every face
    #[must_use]
    pub fn uniform(letter: &str) -> Self {
        Self::from_fn(|_| letter)
    }

    /// Build directly from cubes in x-major flat order
    #[must_use]
    pub const fn from_cubes(cubes: [Cube; CUBE_COUNT]) -> Self {
        Self { cubes }
    }

    pub(crate) fn into_cubes(self) -> [Cube; CUBE_COUNT] {
        self.cubes
    }

    /// The same letters with every use count zeroed and every cube back in play
    ///
    /// This is the starting state a saved move log replays against.
    #[must_use]
    pub fn fresh(&self) -> Self {
        Self::from_fn(|face| self.letter(face).to_owned())
    }

    /// Replace the tile on one face while building a puzzle
    ///
    /// Use counts are left untouched. The tile is uppercased but not checked;
    /// see [`Puzzle::validate`].
    #[must_use]
    pub fn with_letter(mut self, face: IndexedCubeFace, letter: &str) -> Self {
        self.cubes[face.index.flat()].face_mut(face.side).letter = letter.to_ascii_uppercase();
        self
    }

    /// Check that every face holds 1-2 uppercase ASCII letters
    ///
    /// # Errors
    /// Returns the first offending face in flat order.
    ///
    /// # Examples
    /// ```
    /// use cubeword::core::{IndexedCubeFace, LatticePoint, Puzzle, Side};
    ///
    /// assert!(Puzzle::uniform("QU").validate().is_ok());
    ///
    /// let face = IndexedCubeFace::new(LatticePoint::CENTER, Side::Top);
    /// assert!(Puzzle::uniform("E").with_letter(face, "ABC").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for (point, cube) in self.cubes() {
            if let Some((side, face)) =
                cube.faces().find(|(_, face)| !is_valid_letter(&face.letter))
            {
                return Err(SnapshotError::InvalidLetter {
                    face: IndexedCubeFace::new(point, side),
                    letter: face.letter.clone(),
                });
            }
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn cube(&self, point: LatticePoint) -> &Cube {
        &self.cubes[point.flat()]
    }

    #[inline]
    pub(crate) const fn cube_mut(&mut self, point: LatticePoint) -> &mut Cube {
        &mut self.cubes[point.flat()]
    }

    /// All cubes with their positions, in flat order
    pub fn cubes(&self) -> impl Iterator<Item = (LatticePoint, &Cube)> {
        LatticePoint::all().map(|point| (point, self.cube(point)))
    }

    /// Letter of a single face
    #[inline]
    #[must_use]
    pub fn letter(&self, face: IndexedCubeFace) -> &str {
        &self.cube(face.index).face(face.side).letter
    }

    /// Use count of a single face
    #[inline]
    #[must_use]
    pub const fn use_count(&self, face: IndexedCubeFace) -> u32 {
        self.cube(face.index).face(face.side).use_count
    }

    /// Whether the face can be part of a played word
    ///
    /// Every visible side of an in-play cube is selectable; see
    /// [`Puzzle::is_exposed`] for the stricter visibility rule.
    #[inline]
    #[must_use]
    pub const fn is_playable(&self, _side: Side, index: LatticePoint) -> bool {
        self.cube(index).is_in_play()
    }

    /// Whether nothing in the lattice covers this face
    ///
    /// A face is exposed when the neighbouring cell in its outward direction
    /// lies outside the lattice or holds a removed cube.
    #[must_use]
    pub const fn is_exposed(&self, side: Side, index: LatticePoint) -> bool {
        match index.neighbor(side) {
            Some(neighbor) => self.cube(neighbor).was_removed,
            None => true,
        }
    }

    /// Concatenate face letters in selection order
    ///
    /// # Examples
    /// ```
    /// use cubeword::core::{IndexedCubeFace, LatticePoint, Puzzle, Side};
    ///
    /// let center = LatticePoint::CENTER;
    /// let puzzle = Puzzle::uniform("E")
    ///     .with_letter(IndexedCubeFace::new(center, Side::Top), "QU");
    /// let faces = [
    ///     IndexedCubeFace::new(center, Side::Top),
    ///     IndexedCubeFace::new(center, Side::Left),
    /// ];
    /// assert_eq!(puzzle.string_from(&faces), "QUE");
    /// ```
    #[must_use]
    pub fn string_from(&self, faces: &[IndexedCubeFace]) -> String {
        faces.iter().map(|&face| self.letter(face)).collect()
    }

    /// Number of cubes not yet removed
    #[must_use]
    pub fn in_play_count(&self) -> usize {
        self.cubes.iter().filter(|cube| cube.is_in_play()).count()
    }

    /// Whether every cube has been removed
    #[must_use]
    pub fn all_cubes_removed(&self) -> bool {
        self.cubes.iter().all(|cube| cube.was_removed)
    }

    /// In-play cubes whose faces have all reached `threshold` uses
    pub fn removable_cubes(&self, threshold: u32) -> impl Iterator<Item = LatticePoint> + '_ {
        self.cubes()
            .filter(move |(_, cube)| cube.is_in_play() && cube.meets_removal_threshold(threshold))
            .map(|(point, _)| point)
    }

    /// Bump the use count of every distinct face in a played word
    ///
    /// A face the path visits twice still counts once for the move.
    pub(crate) fn record_use(&mut self, faces: &[IndexedCubeFace]) {
        let mut seen = 0u128;
        for &face in faces {
            let bit = 1u128 << face.id();
            if seen & bit != 0 {
                continue;
            }
            seen |= bit;
            let cube_face = self.cube_mut(face.index).face_mut(face.side);
            cube_face.use_count = cube_face.use_count.saturating_add(1);
        }
    }

    pub(crate) const fn remove_cube(&mut self, point: LatticePoint) {
        self.cube_mut(point).was_removed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_face(side: Side) -> IndexedCubeFace {
        IndexedCubeFace::new(LatticePoint::CENTER, side)
    }

    #[test]
    fn from_fn_visits_faces_in_place() {
        let puzzle = Puzzle::from_fn(|face| if face.index == LatticePoint::CENTER { "X" } else { "E" });
        assert_eq!(puzzle.letter(center_face(Side::Right)), "X");
        let origin = LatticePoint::new(0, 0, 0).unwrap();
        assert_eq!(puzzle.letter(IndexedCubeFace::new(origin, Side::Top)), "E");
    }

    #[test]
    fn record_use_counts_each_occurrence() {
        let mut puzzle = Puzzle::uniform("A");
        let faces = [center_face(Side::Top), center_face(Side::Left)];
        puzzle.record_use(&faces);
        puzzle.record_use(&faces[..1]);

        assert_eq!(puzzle.use_count(center_face(Side::Top)), 2);
        assert_eq!(puzzle.use_count(center_face(Side::Left)), 1);
        assert_eq!(puzzle.use_count(center_face(Side::Right)), 0);
    }

    #[test]
    fn record_use_counts_a_revisited_face_once() {
        let mut puzzle = Puzzle::uniform("A");
        let top = center_face(Side::Top);
        puzzle.record_use(&[top, center_face(Side::Left), top]);

        assert_eq!(puzzle.use_count(top), 1);
        assert_eq!(puzzle.use_count(center_face(Side::Left)), 1);
    }

    #[test]
    fn removed_cube_is_not_playable() {
        let mut puzzle = Puzzle::uniform("A");
        assert!(puzzle.is_playable(Side::Top, LatticePoint::CENTER));

        puzzle.remove_cube(LatticePoint::CENTER);
        assert!(!puzzle.is_playable(Side::Top, LatticePoint::CENTER));
        assert_eq!(puzzle.in_play_count(), 26);
        assert!(!puzzle.all_cubes_removed());
    }

    #[test]
    fn exposure_tracks_covering_cube() {
        let mut puzzle = Puzzle::uniform("A");
        assert!(!puzzle.is_exposed(Side::Top, LatticePoint::CENTER));

        puzzle.remove_cube(LatticePoint::new(1, 2, 1).unwrap());
        assert!(puzzle.is_exposed(Side::Top, LatticePoint::CENTER));
        assert!(puzzle.is_exposed(Side::Right, LatticePoint::new(2, 0, 0).unwrap()));
    }

    #[test]
    fn fresh_keeps_letters_and_clears_state() {
        let mut puzzle = Puzzle::uniform("A").with_letter(center_face(Side::Left), "QU");
        puzzle.record_use(&[center_face(Side::Left)]);
        puzzle.remove_cube(LatticePoint::CENTER);

        let fresh = puzzle.fresh();
        assert_eq!(fresh.letter(center_face(Side::Left)), "QU");
        assert_eq!(fresh.use_count(center_face(Side::Left)), 0);
        assert_eq!(fresh.in_play_count(), 27);
    }

    #[test]
    fn removable_cubes_respect_threshold() {
        let mut puzzle = Puzzle::uniform("A");
        let all_three = [
            center_face(Side::Top),
            center_face(Side::Left),
            center_face(Side::Right),
        ];
        puzzle.record_use(&all_three);
        assert_eq!(puzzle.removable_cubes(2).count(), 0);

        puzzle.record_use(&all_three);
        assert_eq!(
            puzzle.removable_cubes(2).collect::<Vec<_>>(),
            vec![LatticePoint::CENTER]
        );
    }
}
