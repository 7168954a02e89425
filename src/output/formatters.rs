//! Formatting utilities for terminal output

use crate::core::{Cube, IndexedCubeFace};

/// Width of one rendered cube cell
pub const CELL_WIDTH: usize = 8;

/// Plain text for one cube cell: top, left and right tiles
#[must_use]
pub fn cube_cell(cube: &Cube) -> String {
    if cube.was_removed {
        return format!("{:^CELL_WIDTH$}", "··");
    }
    format!(
        "{:<2} {:<2} {:<2}",
        cube.top.letter, cube.left.letter, cube.right.letter
    )
}

/// How a cube is highlighted in the layer view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeState {
    Removed,
    /// Every face has reached the removal threshold
    Removable,
    Used,
    Fresh,
}

/// Classify a cube against the session's removal threshold
#[must_use]
pub fn cube_state(cube: &Cube, removal_threshold: u32) -> CubeState {
    if cube.was_removed {
        CubeState::Removed
    } else if cube.meets_removal_threshold(removal_threshold) {
        CubeState::Removable
    } else if cube.faces().any(|(_, face)| face.use_count > 0) {
        CubeState::Used
    } else {
        CubeState::Fresh
    }
}

/// Space-separated face codes, e.g. `111t 111l 111r`
#[must_use]
pub fn face_path(faces: &[IndexedCubeFace]) -> String {
    faces
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
