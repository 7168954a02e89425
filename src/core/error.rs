//! Precondition errors
//!
//! These signal embedder programming errors (bad coordinates, bad player
//! indices). They are kept apart from gameplay rejections so that no
//! player-controlled input can produce one once values are constructed.

use std::fmt;

/// A value outside the kernel's domain was supplied by the embedding code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    /// A lattice coordinate outside `0..=2`
    InvalidIndex(u8),
    /// A player index other than `0` or `1`
    InvalidPlayerIndex(u8),
    /// A face id outside `0..81`
    InvalidFaceId(usize),
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex(value) => {
                write!(f, "Lattice coordinate must be 0, 1 or 2, got {value}")
            }
            Self::InvalidPlayerIndex(value) => {
                write!(f, "Player index must be 0 or 1, got {value}")
            }
            Self::InvalidFaceId(value) => write!(f, "Face id must be below 81, got {value}"),
        }
    }
}

impl std::error::Error for PreconditionError {}
