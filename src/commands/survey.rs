//! Survey command
//!
//! Generates a run of seeded puzzles in parallel and reports how rich they
//! are. Useful when tuning the frequency table or generator thresholds.

use crate::dictionary::{Dictionary, Language};
use crate::generator::{GeneratorConfig, generate_seeded};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Outcome of generating one seed
#[derive(Debug, Clone, Copy)]
pub struct SeedResult {
    pub seed: u64,
    pub word_count: usize,
    pub attempts: usize,
    pub met_threshold: bool,
}

/// Aggregate statistics over a range of seeds
#[derive(Debug, Clone)]
pub struct SurveyStatistics {
    pub total_puzzles: usize,
    pub met_threshold: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub average_words: f64,
    pub average_attempts: f64,
    /// Attempts needed, keyed by attempt count
    pub attempt_distribution: FxHashMap<usize, usize>,
    pub richest_seed: Option<SeedResult>,
    pub poorest_seed: Option<SeedResult>,
    pub total_time: Duration,
}

/// Generate puzzles for seeds `first_seed..first_seed + count`
///
/// # Errors
///
/// Returns an error if the seed range runs past `u64::MAX`.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_survey<D: Dictionary + Sync + ?Sized>(
    dictionary: &D,
    config: &GeneratorConfig,
    first_seed: u64,
    count: usize,
) -> Result<SurveyStatistics, String> {
    let end_seed = u64::try_from(count)
        .ok()
        .and_then(|count| first_seed.checked_add(count))
        .ok_or_else(|| format!("{count} seeds from {first_seed} run past the last seed"))?;

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("Generating");

    let start = Instant::now();
    let results: Vec<SeedResult> = (first_seed..end_seed)
        .into_par_iter()
        .map(|seed| {
            let generated = generate_seeded(seed, dictionary, Language::En, config);
            pb.inc(1);
            SeedResult {
                seed,
                word_count: generated.word_count,
                attempts: generated.attempts,
                met_threshold: generated.met_threshold(config),
            }
        })
        .collect();
    pb.finish_with_message("Complete!");

    let statistics = summarize(&results, start.elapsed());
    info!(
        puzzles = statistics.total_puzzles,
        met_threshold = statistics.met_threshold,
        "survey finished"
    );
    Ok(statistics)
}

fn summarize(results: &[SeedResult], total_time: Duration) -> SurveyStatistics {
    let total_puzzles = results.len();
    let mut attempt_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in results {
        *attempt_distribution.entry(result.attempts).or_insert(0) += 1;
    }

    let average = |sum: usize| {
        if total_puzzles == 0 {
            0.0
        } else {
            sum as f64 / total_puzzles as f64
        }
    };

    // earliest seed wins ties
    let richest_seed = results
        .iter()
        .rev()
        .max_by_key(|r| r.word_count)
        .copied();
    let poorest_seed = results.iter().min_by_key(|r| r.word_count).copied();

    SurveyStatistics {
        total_puzzles,
        met_threshold: results.iter().filter(|r| r.met_threshold).count(),
        min_words: poorest_seed.map_or(0, |r| r.word_count),
        max_words: richest_seed.map_or(0, |r| r.word_count),
        average_words: average(results.iter().map(|r| r.word_count).sum()),
        average_attempts: average(results.iter().map(|r| r.attempts).sum()),
        attempt_distribution,
        richest_seed,
        poorest_seed,
        total_time,
    }
}
