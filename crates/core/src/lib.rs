//! Cube engine - pure, deterministic, and testable
//!
//! This crate owns the state of a 3x3x3 cube and every legal transformation on
//! it. It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Testable**: Every rotation is a permutation checked by unit and property tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Rotations, edits and shuffles work on fixed-size arrays
//!
//! # Module Structure
//!
//! - [`cube`]: Six-face state, rotation, column reads, sticker edits, shuffle
//! - [`adjacency`]: Per-face table of the neighbour strips a turn moves
//! - [`rng`]: Seeded LCG and the [`RandomSource`] injection point
//! - [`snapshot`]: Copyable view of the state for renderers
//! - [`error`]: Input-validation errors
//!
//! # Rules
//!
//! - A turn rotates the face's own 3x3 grid and cycles the four bordering strips
//!   top -> right -> bottom -> left (clockwise) or the reverse
//! - A turn followed by the opposite turn, or four identical turns, is the identity
//! - Center stickers cannot be edited
//! - Indices are validated; nothing wraps or clamps
//!
//! # Example
//!
//! ```
//! use tui_cube_core::Cube;
//! use tui_cube_types::Color;
//!
//! let mut cube = Cube::with_seed(12345);
//! assert!(cube.is_solved());
//!
//! // Turn the red face and the white (top) face
//! cube.rotate(0, true).unwrap();
//! cube.rotate(4, false).unwrap();
//! assert!(!cube.is_solved());
//!
//! // Undo in reverse order
//! cube.rotate(4, true).unwrap();
//! cube.rotate(0, false).unwrap();
//! assert!(cube.is_solved());
//!
//! // Centers are immutable
//! assert_eq!(cube.set_cell(2, 1, 1, Color::Red), Ok(false));
//! assert!(cube.rotate(6, true).is_err());
//! ```

pub mod adjacency;
pub mod cube;
pub mod error;
pub mod rng;
pub mod snapshot;

pub use tui_cube_types as types;

// Re-export commonly used types for convenience
pub use cube::{canonical_color, Cube, FaceGrid};
pub use error::{Axis, CubeError};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::CubeSnapshot;
