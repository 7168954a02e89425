//! Core domain types for the cube lattice
//!
//! Geometry, the mutable cube grid and the move log. Everything here is plain
//! data plus pure queries; the rules that mutate it live in [`crate::rules`].

mod cube;
mod error;
mod lattice;
mod moves;
mod puzzle;

pub use cube::{Cube, CubeFace, MAX_LETTER_LEN, is_valid_letter};
pub use error::PreconditionError;
pub use lattice::{CUBE_COUNT, FACE_COUNT, Index, IndexedCubeFace, LatticePoint, Side, touching};
pub use moves::{Move, MoveType, Moves, PlayedWord, PlayerIndex, Reaction};
pub use puzzle::Puzzle;
