//! Solve command
//!
//! Lists every word findable on a seeded puzzle.

use crate::core::Puzzle;
use crate::dictionary::{Dictionary, Language};
use crate::generator::{GeneratorConfig, generate_seeded};
use crate::rules::Rules;
use crate::solver::{FoundWord, Solver};
use std::time::{Duration, Instant};
use tracing::info;

/// Words found on one puzzle
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub seed: u64,
    pub puzzle: Puzzle,
    /// Best first, possibly truncated to the requested limit
    pub words: Vec<FoundWord>,
    /// Findable words before truncation
    pub total_words: usize,
    /// Sum of every findable word's score
    pub total_score: i32,
    pub duration: Duration,
}

/// Generate the puzzle for `seed` and enumerate its words
pub fn solve_seed<D: Dictionary + ?Sized>(
    seed: u64,
    dictionary: &D,
    rules: &Rules,
    config: &GeneratorConfig,
    limit: Option<usize>,
) -> SolveResult {
    let puzzle = generate_seeded(seed, dictionary, Language::En, config).puzzle;

    let start = Instant::now();
    let mut words =
        Solver::new(dictionary, Language::En, rules).find_words(&puzzle, config.max_word_length);
    let duration = start.elapsed();

    let total_words = words.len();
    let total_score = words.iter().map(|w| w.score).sum();
    info!(seed, total_words, total_score, "puzzle solved");

    if let Some(limit) = limit {
        words.truncate(limit);
    }

    SolveResult {
        seed,
        puzzle,
        words,
        total_words,
        total_score,
        duration,
    }
}
