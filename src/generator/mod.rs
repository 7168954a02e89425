//! Puzzle generation
//!
//! Generate-and-test: sample every face from [`LETTER_FREQUENCIES`], count
//! the words the result exposes, and resample until the count clears
//! [`GeneratorConfig::min_words`]. The loop is bounded; when no attempt
//! qualifies the richest candidate is returned instead.

mod frequencies;

use crate::core::Puzzle;
use crate::dictionary::{Dictionary, Language};
use crate::rules::Rules;
use crate::solver::Solver;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use frequencies::LETTER_FREQUENCIES;

/// Generation tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Distinct findable words a puzzle needs to be accepted
    pub min_words: usize,
    /// Candidates to try before settling for the best one
    pub max_attempts: usize,
    /// Longest path, in faces, the word count considers
    pub max_word_length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_words: 30,
            max_attempts: 16,
            max_word_length: 8,
        }
    }
}

/// A generated puzzle and how it was graded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub puzzle: Puzzle,
    /// Distinct words findable on the puzzle
    pub word_count: usize,
    /// Candidates sampled, including the returned one
    pub attempts: usize,
}

impl Generated {
    /// Whether the puzzle met the word threshold rather than being a fallback
    #[must_use]
    pub const fn met_threshold(&self, config: &GeneratorConfig) -> bool {
        self.word_count >= config.min_words
    }
}

/// Sample one puzzle without grading it
pub fn random_puzzle<R: Rng + ?Sized>(rng: &mut R) -> Puzzle {
    let (tiles, weights): (Vec<&str>, Vec<u32>) = LETTER_FREQUENCIES.iter().copied().unzip();
    match WeightedIndex::new(weights) {
        Ok(distribution) => Puzzle::from_fn(|_| tiles[distribution.sample(rng)]),
        // unreachable with a non-empty table of positive weights
        Err(_) => Puzzle::uniform("E"),
    }
}

/// Generate a puzzle that exposes at least `config.min_words` words
///
/// Always returns a puzzle: after `config.max_attempts` misses, the candidate
/// with the most words wins.
pub fn generate<R, D>(
    rng: &mut R,
    dictionary: &D,
    language: Language,
    config: &GeneratorConfig,
) -> Generated
where
    R: Rng + ?Sized,
    D: Dictionary + ?Sized,
{
    let rules = Rules::default();
    let solver = Solver::new(dictionary, language, &rules);
    let max_attempts = config.max_attempts.max(1);
    let mut best: Option<(Puzzle, usize)> = None;

    for attempt in 1..=max_attempts {
        let puzzle = random_puzzle(rng);
        let word_count = solver.find_words(&puzzle, config.max_word_length).len();
        debug!(attempt, word_count, min_words = config.min_words, "puzzle candidate");

        if word_count >= config.min_words {
            return Generated {
                puzzle,
                word_count,
                attempts: attempt,
            };
        }
        if best.as_ref().is_none_or(|(_, most)| word_count > *most) {
            best = Some((puzzle, word_count));
        }
    }

    let (puzzle, word_count) = best.unwrap_or_else(|| (Puzzle::uniform("E"), 0));
    warn!(
        max_attempts,
        word_count,
        min_words = config.min_words,
        "no candidate met the word threshold, using best"
    );
    Generated {
        puzzle,
        word_count,
        attempts: max_attempts,
    }
}

/// [`generate`] driven by a seeded [`StdRng`], so a seed identifies a puzzle
///
/// # Examples
/// ```
/// use cubeword::dictionary::{Language, WordList};
/// use cubeword::generator::{GeneratorConfig, generate_seeded};
///
/// let words = WordList::embedded();
/// let config = GeneratorConfig { max_attempts: 2, ..GeneratorConfig::default() };
/// let a = generate_seeded(7, &words, Language::En, &config);
/// let b = generate_seeded(7, &words, Language::En, &config);
/// assert_eq!(a, b);
/// ```
pub fn generate_seeded<D: Dictionary + ?Sized>(
    seed: u64,
    dictionary: &D,
    language: Language,
    config: &GeneratorConfig,
) -> Generated {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(&mut rng, dictionary, language, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IndexedCubeFace, is_valid_letter};
    use crate::dictionary::WordList;
    use crate::dictionary::loader::words_from_slice;

    fn quick() -> GeneratorConfig {
        GeneratorConfig {
            min_words: 5,
            max_attempts: 4,
            max_word_length: 5,
        }
    }

    #[test]
    fn same_seed_gives_identical_snapshot() {
        let words = WordList::embedded();
        let first = generate_seeded(42, &words, Language::En, &quick());
        let second = generate_seeded(42, &words, Language::En, &quick());

        assert_eq!(
            serde_json::to_string(&first.puzzle).unwrap(),
            serde_json::to_string(&second.puzzle).unwrap()
        );
        assert_eq!(first.word_count, second.word_count);
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        assert_ne!(random_puzzle(&mut a), random_puzzle(&mut b));
    }

    #[test]
    fn generated_tiles_are_valid_and_fresh() {
        let mut rng = StdRng::seed_from_u64(9);
        let puzzle = random_puzzle(&mut rng);
        for face in IndexedCubeFace::all() {
            assert!(is_valid_letter(puzzle.letter(face)));
            assert_ne!(puzzle.letter(face), "Q");
            assert_eq!(puzzle.use_count(face), 0);
        }
        assert_eq!(puzzle.in_play_count(), 27);
    }

    #[test]
    fn empty_dictionary_falls_back_after_budget() {
        let words = words_from_slice(&[]);
        let generated = generate_seeded(3, &words, Language::En, &quick());
        assert_eq!(generated.word_count, 0);
        assert_eq!(generated.attempts, 4);
        assert!(!generated.met_threshold(&quick()));
    }

    #[test]
    fn zero_attempts_still_produces_a_puzzle() {
        let words = words_from_slice(&[]);
        let config = GeneratorConfig {
            max_attempts: 0,
            ..quick()
        };
        let generated = generate_seeded(3, &words, Language::En, &config);
        assert_eq!(generated.attempts, 1);
    }

    #[test]
    fn reachable_threshold_stops_early() {
        let words = WordList::embedded();
        let config = GeneratorConfig {
            min_words: 0,
            ..quick()
        };
        let generated = generate_seeded(5, &words, Language::En, &config);
        assert_eq!(generated.attempts, 1);
        assert!(generated.met_threshold(&config));
    }
}
