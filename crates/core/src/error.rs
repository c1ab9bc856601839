//! Error type for cube operations.

use tui_cube_types::{FACE_DIM, NUM_FACES};

/// Input-validation errors surfaced by the cube engine.
///
/// Indices are never wrapped or clamped; an out-of-range index is rejected
/// before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CubeError {
    /// Face index outside `0..NUM_FACES`.
    #[error("invalid face index {face} (expected 0..{max})", max = NUM_FACES)]
    InvalidFace { face: usize },
    /// Row or column index outside `0..FACE_DIM`.
    #[error("invalid {axis} index {index} (expected 0..{max})", max = FACE_DIM)]
    InvalidIndex { axis: Axis, index: usize },
}

/// Which coordinate of a sticker was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Axis::Row => "row",
            Axis::Col => "col",
        })
    }
}

pub(crate) fn check_face(face: usize) -> Result<usize, CubeError> {
    if face < NUM_FACES {
        Ok(face)
    } else {
        Err(CubeError::InvalidFace { face })
    }
}

pub(crate) fn check_index(axis: Axis, index: usize) -> Result<usize, CubeError> {
    if index < FACE_DIM {
        Ok(index)
    } else {
        Err(CubeError::InvalidIndex { axis, index })
    }
}
