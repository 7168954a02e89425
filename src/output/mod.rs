//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_game_stats, print_generate_result, print_puzzle, print_solve_result,
    print_survey_statistics,
};
