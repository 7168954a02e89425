//! Command implementations

pub mod generate;
pub mod play;
pub mod replay;
pub mod solve;
pub mod survey;

pub use generate::{GenerateResult, generate_puzzle};
pub use play::{PlaySession, run_play};
pub use replay::{GameStats, replay_game};
pub use solve::{SolveResult, solve_seed};
pub use survey::{SeedResult, SurveyStatistics, run_survey};
