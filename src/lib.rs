//! Cubeword
//!
//! A word-puzzle kernel for a 3×3×3 lattice of letter cubes. Players trace
//! words across touching cube faces; every face counts its uses, and a cube
//! whose faces are all used up can be removed to expose the cubes behind it.
//!
//! The kernel is synchronous, deterministic and free of I/O: replaying the
//! same move log against the same starting puzzle always gives the same
//! result.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use cubeword::core::{IndexedCubeFace, LatticePoint, Moves, Puzzle, Side};
//! use cubeword::dictionary::WordList;
//! use cubeword::rules::{MoveError, MoveRequest, Verifier};
//!
//! let center = LatticePoint::CENTER;
//! let path = vec![
//!     IndexedCubeFace::new(center, Side::Top),
//!     IndexedCubeFace::new(center, Side::Left),
//!     IndexedCubeFace::new(center, Side::Right),
//! ];
//! let mut puzzle = Puzzle::uniform("E")
//!     .with_letter(path[0], "C")
//!     .with_letter(path[1], "A")
//!     .with_letter(path[2], "B");
//! let mut moves = Moves::new();
//!
//! let words = WordList::embedded();
//! let verifier = Verifier::new(&words);
//!
//! let request = MoveRequest::played_word(Utc::now(), None, path.clone());
//! assert_eq!(verifier.apply(request, &mut puzzle, &mut moves), Ok(21));
//!
//! let again = MoveRequest::played_word(Utc::now(), None, path);
//! assert_eq!(
//!     verifier.apply(again, &mut puzzle, &mut moves),
//!     Err(MoveError::AlreadyPlayed("CAB".to_string()))
//! );
//! ```

// Lattice, cubes, puzzle grid and move log
pub mod core;

// Word scoring
pub mod scoring;

// Word and prefix lookups
pub mod dictionary;

// Move verification, turn policies, replay, game over
pub mod rules;

// Touching-path word enumeration
pub mod solver;

// Seeded puzzle generation
pub mod generator;

// Incremental face selection
pub mod selection;

// Serialized puzzle and game state
pub mod snapshot;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
