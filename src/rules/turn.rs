//! Turn ownership
//!
//! The verifier never knows about matches or seats. Whoever embeds it decides
//! whose turn it is by injecting a [`TurnPolicy`].

use crate::core::{Move, MoveType, Moves, PlayerIndex, Puzzle};

/// Decides whether the author of a candidate move may make it now
pub trait TurnPolicy {
    fn is_valid_turn(&self, candidate: &Move, puzzle: &Puzzle, moves: &Moves) -> bool;
}

impl<F> TurnPolicy for F
where
    F: Fn(&Move, &Puzzle, &Moves) -> bool,
{
    fn is_valid_turn(&self, candidate: &Move, puzzle: &Puzzle, moves: &Moves) -> bool {
        self(candidate, puzzle, moves)
    }
}

/// Every move is in turn (solo play)
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyTurn;

impl TurnPolicy for AnyTurn {
    fn is_valid_turn(&self, _candidate: &Move, _puzzle: &Puzzle, _moves: &Moves) -> bool {
        true
    }
}

/// Two seats alternate, starting with [`PlayerIndex::First`]
///
/// A played word hands the turn to the other seat; removing a cube does not,
/// so a player may clear spent cubes before or after their word.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlternatingTurns;

impl AlternatingTurns {
    /// Seat expected to move next, given the log so far
    #[must_use]
    pub fn current_player(moves: &Moves) -> PlayerIndex {
        moves.iter().fold(PlayerIndex::First, |current, m| match m.kind {
            MoveType::PlayedWord(_) => m.player_index.unwrap_or(current).other(),
            MoveType::RemovedCube(_) => current,
        })
    }
}

impl TurnPolicy for AlternatingTurns {
    fn is_valid_turn(&self, candidate: &Move, _puzzle: &Puzzle, moves: &Moves) -> bool {
        candidate.player_index == Some(Self::current_player(moves))
    }
}
