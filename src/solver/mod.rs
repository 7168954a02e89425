//! Word finding
//!
//! Enumerates the words that can currently be traced on a puzzle. The
//! generator uses it to grade candidate puzzles and the CLI uses it for hints.

mod finder;

pub use finder::{FoundWord, Solver, find_words};
