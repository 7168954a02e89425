//! Rebuilding game state from a saved move log

use super::{MoveError, MoveRequest, TurnPolicy, Verifier};
use crate::core::{Moves, Puzzle};
use crate::dictionary::Dictionary;
use std::fmt;
use tracing::debug;

/// Why a saved log could not be replayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The move at `index` is illegal against the state built so far
    Rejected { index: usize, error: MoveError },
    /// The move at `index` is legal but was saved with a different score
    ScoreMismatch {
        index: usize,
        recorded: i32,
        computed: i32,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { index, error } => write!(f, "Move {index} was rejected: {error}"),
            Self::ScoreMismatch {
                index,
                recorded,
                computed,
            } => write!(
                f,
                "Move {index} was saved with score {recorded} but scores {computed}"
            ),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected { error, .. } => Some(error),
            Self::ScoreMismatch { .. } => None,
        }
    }
}

/// Apply a saved log, in order, to a fresh copy of `initial`
///
/// Every move goes back through the verifier, so a tampered log fails at the
/// first bad entry. Replaying the same initial puzzle and log always yields
/// the same state.
///
/// # Errors
/// Returns [`ReplayError`] naming the first move that fails to verify or
/// whose saved score disagrees with the recomputed one.
pub fn replay<D, T>(
    verifier: &Verifier<'_, D, T>,
    initial: &Puzzle,
    log: &Moves,
) -> Result<(Puzzle, Moves), ReplayError>
where
    D: Dictionary + ?Sized,
    T: TurnPolicy,
{
    let mut puzzle = initial.clone();
    let mut moves = Moves::new();

    for (index, saved) in log.iter().enumerate() {
        let recorded = saved.score;
        let computed = verifier
            .apply(MoveRequest::from(saved.clone()), &mut puzzle, &mut moves)
            .map_err(|error| ReplayError::Rejected { index, error })?;
        if computed != recorded {
            return Err(ReplayError::ScoreMismatch {
                index,
                recorded,
                computed,
            });
        }
    }

    debug!(moves = moves.len(), score = moves.total_score(), "log replayed");
    Ok((puzzle, moves))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IndexedCubeFace, LatticePoint, Move, MoveType, Side};
    use crate::dictionary::loader::words_from_slice;
    use chrono::{TimeZone, Utc};

    fn center(side: Side) -> IndexedCubeFace {
        IndexedCubeFace::new(LatticePoint::CENTER, side)
    }

    fn cab_puzzle() -> Puzzle {
        Puzzle::uniform("E")
            .with_letter(center(Side::Top), "C")
            .with_letter(center(Side::Left), "A")
            .with_letter(center(Side::Right), "B")
    }

    fn played(faces: Vec<IndexedCubeFace>, score: i32) -> Move {
        Move {
            played_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            player_index: None,
            reactions: None,
            score,
            kind: MoveType::PlayedWord(faces),
        }
    }

    fn saved_game() -> (Puzzle, Moves) {
        let words = words_from_slice(&["cab", "bac"]);
        let verifier = Verifier::new(&words);
        let mut puzzle = cab_puzzle();
        let mut moves = Moves::new();
        for faces in [
            vec![center(Side::Top), center(Side::Left), center(Side::Right)],
            vec![center(Side::Right), center(Side::Left), center(Side::Top)],
        ] {
            verifier
                .apply(MoveRequest::from(played(faces, 0)), &mut puzzle, &mut moves)
                .unwrap();
        }
        verifier
            .apply(
                MoveRequest::removed_cube(Utc::now(), None, LatticePoint::CENTER),
                &mut puzzle,
                &mut moves,
            )
            .unwrap();
        (puzzle, moves)
    }

    #[test]
    fn replay_is_deterministic() {
        let words = words_from_slice(&["cab", "bac"]);
        let verifier = Verifier::new(&words);
        let (expected_puzzle, log) = saved_game();

        let first = replay(&verifier, &cab_puzzle(), &log).unwrap();
        let second = replay(&verifier, &cab_puzzle(), &log).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.0, expected_puzzle);
        assert_eq!(first.1, log);
    }

    #[test]
    fn replay_rejects_duplicate_word() {
        let words = words_from_slice(&["cab"]);
        let verifier = Verifier::new(&words);
        let cab = vec![center(Side::Top), center(Side::Left), center(Side::Right)];
        let mut log = Moves::new();
        log.push(played(cab.clone(), 21));
        log.push(played(cab, 21));

        let error = replay(&verifier, &cab_puzzle(), &log).unwrap_err();
        assert_eq!(
            error,
            ReplayError::Rejected {
                index: 1,
                error: MoveError::AlreadyPlayed("CAB".to_string()),
            }
        );
    }

    #[test]
    fn replay_detects_tampered_score() {
        let words = words_from_slice(&["cab"]);
        let verifier = Verifier::new(&words);
        let mut log = Moves::new();
        log.push(played(
            vec![center(Side::Top), center(Side::Left), center(Side::Right)],
            500,
        ));

        let error = replay(&verifier, &cab_puzzle(), &log).unwrap_err();
        assert_eq!(
            error,
            ReplayError::ScoreMismatch {
                index: 0,
                recorded: 500,
                computed: 21,
            }
        );
        assert!(error.to_string().contains("500"));
    }
}
