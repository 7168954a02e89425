//! End-of-game predicates
//!
//! The kernel never reads a clock. Callers pass the elapsed time they measured
//! and poll [`game_over`] after each accepted move (or on a timer).

use super::Rules;
use crate::core::Puzzle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a game is played out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Ends after [`Rules::timed_limit_secs`]
    Timed,
    /// Ends only when every cube is removed (or the player gives up)
    #[default]
    Unlimited,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timed => write!(f, "timed"),
            Self::Unlimited => write!(f, "unlimited"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "timed" => Ok(Self::Timed),
            "unlimited" => Ok(Self::Unlimited),
            other => Err(format!("unknown game mode: {other}")),
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameOver {
    AllCubesRemoved,
    TimeExpired,
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllCubesRemoved => write!(f, "every cube has been removed"),
            Self::TimeExpired => write!(f, "time is up"),
        }
    }
}

/// Whether a timed game has run out of time
#[inline]
#[must_use]
pub const fn is_time_expired(mode: GameMode, elapsed_secs: u64, rules: &Rules) -> bool {
    matches!(mode, GameMode::Timed) && elapsed_secs >= rules.timed_limit_secs
}

/// Why the game has ended, or `None` while it is still running
///
/// A cleared puzzle takes precedence over the clock.
///
/// # Examples
/// ```
/// use cubeword::core::Puzzle;
/// use cubeword::rules::{GameMode, GameOver, Rules, game_over};
///
/// let puzzle = Puzzle::uniform("E");
/// let rules = Rules::default();
/// assert_eq!(game_over(&puzzle, GameMode::Timed, 10, &rules), None);
/// assert_eq!(
///     game_over(&puzzle, GameMode::Timed, 180, &rules),
///     Some(GameOver::TimeExpired)
/// );
/// assert_eq!(game_over(&puzzle, GameMode::Unlimited, 10_000, &rules), None);
/// ```
#[must_use]
pub fn game_over(
    puzzle: &Puzzle,
    mode: GameMode,
    elapsed_secs: u64,
    rules: &Rules,
) -> Option<GameOver> {
    if puzzle.all_cubes_removed() {
        Some(GameOver::AllCubesRemoved)
    } else if is_time_expired(mode, elapsed_secs, rules) {
        Some(GameOver::TimeExpired)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LatticePoint;

    #[test]
    fn cleared_puzzle_ends_any_mode() {
        let mut puzzle = Puzzle::uniform("E");
        for point in LatticePoint::all() {
            puzzle.remove_cube(point);
        }
        let rules = Rules::default();
        for mode in [GameMode::Timed, GameMode::Unlimited] {
            assert_eq!(
                game_over(&puzzle, mode, 0, &rules),
                Some(GameOver::AllCubesRemoved)
            );
        }
        assert_eq!(
            game_over(&puzzle, GameMode::Timed, 999, &rules),
            Some(GameOver::AllCubesRemoved)
        );
    }

    #[test]
    fn time_limit_comes_from_rules() {
        let rules = Rules {
            timed_limit_secs: 60,
            ..Rules::default()
        };
        assert!(!is_time_expired(GameMode::Timed, 59, &rules));
        assert!(is_time_expired(GameMode::Timed, 60, &rules));
        assert!(!is_time_expired(GameMode::Unlimited, 60, &rules));
    }

    #[test]
    fn mode_parses_and_serializes() {
        assert_eq!("Timed".parse::<GameMode>(), Ok(GameMode::Timed));
        assert!("blitz".parse::<GameMode>().is_err());
        assert_eq!(serde_json::to_string(&GameMode::Unlimited).unwrap(), "\"unlimited\"");
        assert_eq!(GameMode::default(), GameMode::Unlimited);
    }
}
