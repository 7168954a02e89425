//! Game rules
//!
//! The move verifier/applier and everything it is parameterized by: rule
//! constants, the injectable turn-ownership predicate, replay of a saved move
//! log, and the game-over predicates the orchestration layer polls after each
//! accepted move.

mod game_over;
mod replay;
mod turn;
mod verifier;

use crate::core::{IndexedCubeFace, Puzzle};
use crate::scoring::LetterValues;
use serde::{Deserialize, Serialize};

pub use game_over::{GameMode, GameOver, game_over, is_time_expired};
pub use replay::{ReplayError, replay};
pub use turn::{AlternatingTurns, AnyTurn, TurnPolicy};
pub use verifier::{MoveError, MoveRequest, Verifier};

/// Tunable rule constants
///
/// Every field has a default, so a rules file only needs the values it changes.
///
/// # Examples
/// ```
/// use cubeword::rules::Rules;
///
/// let rules: Rules = serde_json::from_str(r#"{ "removalThreshold": 3 }"#).unwrap();
/// assert_eq!(rules.removal_threshold, 3);
/// assert_eq!(rules.min_word_length, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rules {
    /// Fewest faces a played word may trace
    pub min_word_length: usize,
    /// Uses every face of a cube needs before the cube can be removed
    pub removal_threshold: u32,
    /// Only faces not covered by a neighbouring in-play cube are selectable
    pub exposed_faces_only: bool,
    /// Length of a timed game, in seconds
    pub timed_limit_secs: u64,
    /// Tile values used for scoring
    pub letter_values: LetterValues,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_word_length: 3,
            removal_threshold: 2,
            exposed_faces_only: false,
            timed_limit_secs: 180,
            letter_values: LetterValues::ENGLISH,
        }
    }
}

impl Rules {
    /// Whether a face may be part of a played word under these rules
    #[must_use]
    pub const fn face_is_playable(&self, puzzle: &Puzzle, face: IndexedCubeFace) -> bool {
        puzzle.is_playable(face.side, face.index)
            && (!self.exposed_faces_only || puzzle.is_exposed(face.side, face.index))
    }
}
