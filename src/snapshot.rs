//! Snapshot format
//!
//! A puzzle serializes as a nested `[x][y][z]` array of cubes so that saved
//! games read naturally layer by layer. Both directions validate every tile,
//! so whatever serializes also parses back.

use crate::core::{Cube, CUBE_COUNT, IndexedCubeFace, Moves, Puzzle};
use crate::rules::GameMode;
use serde::{Deserialize, Serialize, Serializer};
use std::array;
use std::fmt;

/// Per-cube snapshot entry
pub type CubeSnapshot = Cube;

/// Puzzle state as nested arrays, indexed `[x][y][z]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleSnapshot(pub [[[CubeSnapshot; 3]; 3]; 3]);

/// A snapshot that does not describe a valid puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// A face carries something other than 1-2 uppercase ASCII letters
    InvalidLetter {
        face: IndexedCubeFace,
        letter: String,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter { face, letter } => {
                write!(f, "Face {face} has invalid letter {letter:?}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<Puzzle> for PuzzleSnapshot {
    fn from(puzzle: Puzzle) -> Self {
        let cubes = puzzle.into_cubes();
        Self(array::from_fn(|x| {
            array::from_fn(|y| array::from_fn(|z| cubes[x * 9 + y * 3 + z].clone()))
        }))
    }
}

impl TryFrom<PuzzleSnapshot> for Puzzle {
    type Error = SnapshotError;

    fn try_from(snapshot: PuzzleSnapshot) -> Result<Self, Self::Error> {
        let cubes: [Cube; CUBE_COUNT] =
            array::from_fn(|flat| snapshot.0[flat / 9][(flat / 3) % 3][flat % 3].clone());
        let puzzle = Self::from_cubes(cubes);
        puzzle.validate()?;
        Ok(puzzle)
    }
}

impl Serialize for Puzzle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.validate().map_err(serde::ser::Error::custom)?;
        PuzzleSnapshot::from(self.clone()).serialize(serializer)
    }
}

/// Everything needed to resume or audit a game
///
/// # Examples
/// ```
/// use cubeword::core::{Moves, Puzzle};
/// use cubeword::rules::GameMode;
/// use cubeword::snapshot::GameSnapshot;
///
/// let game = GameSnapshot::new(Puzzle::uniform("E"), Moves::new(), GameMode::Timed);
/// let json = game.to_json().unwrap();
/// assert_eq!(GameSnapshot::from_json(&json).unwrap(), game);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub puzzle: Puzzle,
    pub moves: Moves,
    #[serde(default)]
    pub mode: GameMode,
}

impl GameSnapshot {
    #[must_use]
    pub const fn new(puzzle: Puzzle, moves: Moves, mode: GameMode) -> Self {
        Self {
            puzzle,
            moves,
            mode,
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if the puzzle holds an invalid tile.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse and validate a saved game
    ///
    /// # Errors
    /// Returns an error for malformed JSON or an invalid puzzle.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Compact JSON for a puzzle on its own
///
/// # Errors
/// Returns an error if the puzzle holds an invalid tile.
pub fn to_json(puzzle: &Puzzle) -> serde_json::Result<String> {
    serde_json::to_string(puzzle)
}

/// Parse and validate a puzzle
///
/// # Errors
/// Returns an error for malformed JSON or an invalid tile.
pub fn from_json(json: &str) -> serde_json::Result<Puzzle> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LatticePoint, Side};

    fn face(x: u8, y: u8, z: u8, side: Side) -> IndexedCubeFace {
        IndexedCubeFace::new(LatticePoint::new(x, y, z).unwrap(), side)
    }

    #[test]
    fn snapshot_is_indexed_x_then_y_then_z() {
        let puzzle = Puzzle::uniform("E").with_letter(face(2, 0, 1, Side::Left), "QU");
        let value = serde_json::to_value(&puzzle).unwrap();

        assert_eq!(value[2][0][1]["left"]["letter"], "QU");
        assert_eq!(value[2][0][1]["left"]["useCount"], 0);
        assert_eq!(value[2][0][1]["wasRemoved"], false);
        assert_eq!(value[0][0][0]["top"]["letter"], "E");
    }

    #[test]
    fn puzzle_roundtrips_through_json() {
        let mut puzzle = Puzzle::uniform("A").with_letter(face(1, 2, 0, Side::Top), "Z");
        puzzle.record_use(&[face(1, 2, 0, Side::Top)]);
        puzzle.remove_cube(LatticePoint::new(0, 0, 2).unwrap());

        let json = to_json(&puzzle).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, puzzle);
        assert_eq!(to_json(&restored).unwrap(), json);
    }

    #[test]
    fn invalid_letters_are_rejected() {
        let mut snapshot = PuzzleSnapshot::from(Puzzle::uniform("E"));
        snapshot.0[1][1][1].right.letter = "e".to_string();

        assert_eq!(
            Puzzle::try_from(snapshot),
            Err(SnapshotError::InvalidLetter {
                face: face(1, 1, 1, Side::Right),
                letter: "e".to_string(),
            })
        );
    }

    #[test]
    fn invalid_tiles_do_not_serialize() {
        let puzzle = Puzzle::uniform("E").with_letter(face(0, 1, 2, Side::Top), "ABC");
        let error = to_json(&puzzle).unwrap_err();
        assert!(error.to_string().contains("\"ABC\""), "{error}");

        let digit = Puzzle::uniform("1");
        assert_eq!(
            digit.validate(),
            Err(SnapshotError::InvalidLetter {
                face: face(0, 0, 0, Side::Top),
                letter: "1".to_string(),
            })
        );
        let game = GameSnapshot::new(digit, Moves::new(), GameMode::Timed);
        assert!(game.to_json().is_err());
    }

    #[test]
    fn invalid_json_puzzle_fails_to_parse() {
        let mut value = serde_json::to_value(Puzzle::uniform("E")).unwrap();
        value[0][0][0]["top"]["letter"] = "QUA".into();
        assert!(from_json(&value.to_string()).is_err());
    }

    #[test]
    fn mode_defaults_when_missing() {
        let game = GameSnapshot::new(Puzzle::uniform("E"), Moves::new(), GameMode::Unlimited);
        let mut value = serde_json::to_value(&game).unwrap();
        value.as_object_mut().unwrap().remove("mode");
        let restored: GameSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(restored.mode, GameMode::Unlimited);
    }
}
