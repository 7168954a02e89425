//! Replay command
//!
//! Re-verifies a saved game move by move and summarizes it.

use crate::core::{PlayedWord, Puzzle};
use crate::dictionary::Dictionary;
use crate::rules::{AlternatingTurns, GameMode, ReplayError, Rules, Verifier, replay};
use crate::snapshot::GameSnapshot;
use tracing::{info, warn};

/// Summary of a verified game
#[derive(Debug, Clone)]
pub struct GameStats {
    pub mode: GameMode,
    pub total_moves: usize,
    pub words_played: usize,
    pub cubes_removed: usize,
    pub total_score: i32,
    /// Per-seat totals; both zero in solo games
    pub player_scores: [i32; 2],
    pub longest_word: Option<PlayedWord>,
    pub highest_scoring_word: Option<PlayedWord>,
    pub words: Vec<PlayedWord>,
    /// Whether the saved puzzle matches the state rebuilt from the log
    pub state_matches: bool,
    pub final_puzzle: Puzzle,
}

/// Replay `game` from its starting puzzle
///
/// The starting puzzle is the saved one with every use count and removal
/// cleared. Games whose moves all carry a player index are checked with
/// [`AlternatingTurns`].
///
/// # Errors
/// Returns the first move that fails verification.
pub fn replay_game<D: Dictionary + ?Sized>(
    game: &GameSnapshot,
    dictionary: &D,
    rules: &Rules,
) -> Result<GameStats, ReplayError> {
    let initial = game.puzzle.fresh();
    let verifier = Verifier::new(dictionary).with_rules(rules.clone());
    let two_player =
        !game.moves.is_empty() && game.moves.iter().all(|m| m.player_index.is_some());

    let (puzzle, moves) = if two_player {
        replay(&verifier.with_turn_policy(AlternatingTurns), &initial, &game.moves)?
    } else {
        replay(&verifier, &initial, &game.moves)?
    };

    let state_matches = puzzle == game.puzzle;
    if state_matches {
        info!(moves = moves.len(), "saved game verified");
    } else {
        warn!("saved puzzle state differs from the replayed log");
    }

    Ok(GameStats {
        mode: game.mode,
        total_moves: moves.len(),
        words_played: moves.word_count(),
        cubes_removed: moves.removed_cubes().count(),
        total_score: moves.total_score(),
        player_scores: moves.player_scores(),
        longest_word: moves.longest_word(&puzzle),
        highest_scoring_word: moves.highest_scoring_word(&puzzle),
        words: moves.played_words(&puzzle),
        state_matches,
        final_puzzle: puzzle,
    })
}
