//! Generate command
//!
//! Produces the puzzle identified by a seed.

use crate::dictionary::{Dictionary, Language};
use crate::generator::{Generated, GeneratorConfig, generate_seeded};
use std::time::{Duration, Instant};
use tracing::info;

/// A generated puzzle with its seed and timing
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub seed: u64,
    pub generated: Generated,
    pub met_threshold: bool,
    pub duration: Duration,
}

/// Generate the puzzle for `seed`
pub fn generate_puzzle<D: Dictionary + ?Sized>(
    seed: u64,
    dictionary: &D,
    config: &GeneratorConfig,
) -> GenerateResult {
    let start = Instant::now();
    let generated = generate_seeded(seed, dictionary, Language::En, config);
    let duration = start.elapsed();
    info!(
        seed,
        words = generated.word_count,
        attempts = generated.attempts,
        "puzzle generated"
    );

    GenerateResult {
        seed,
        met_threshold: generated.met_threshold(config),
        generated,
        duration,
    }
}
