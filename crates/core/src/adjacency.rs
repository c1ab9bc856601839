//! Adjacency table - which neighbour stickers move when a face turns
//!
//! Each face has four bordering strips listed in clockwise order around it
//! (top, right, bottom, left as seen when looking at the face). A strip is the
//! three stickers of a neighbouring face that touch the turned face, listed in
//! a traversal order chosen so that a clockwise quarter turn moves the i-th
//! sticker of strip k onto the i-th sticker of strip k+1. Counter-clockwise
//! moves strip k+1 back onto strip k.
//!
//! Side faces (0-3) each touch the top and bottom along a different edge, so
//! their rows differ per ring position. The top and bottom faces always touch
//! row 0 (top) or row 2 (bottom) of every side face.
//!
//! Net layout the table is written against (top and bottom sit above and
//! below face 1):
//!
//! ```text
//!        [4]
//!   [0]  [1]  [2]  [3]
//!        [5]
//! ```

use tui_cube_types::{BOTTOM_FACE, FACE_DIM, NUM_FACES, TOP_FACE};

/// (row, col) within a face
pub type Pos = (usize, usize);

/// Three stickers of one face that border a turned face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    pub face: usize,
    pub cells: [Pos; FACE_DIM],
}

const fn col(face: usize, c: usize) -> Strip {
    Strip {
        face,
        cells: [(0, c), (1, c), (2, c)],
    }
}

const fn col_rev(face: usize, c: usize) -> Strip {
    Strip {
        face,
        cells: [(2, c), (1, c), (0, c)],
    }
}

const fn row(face: usize, r: usize) -> Strip {
    Strip {
        face,
        cells: [(r, 0), (r, 1), (r, 2)],
    }
}

const fn row_rev(face: usize, r: usize) -> Strip {
    Strip {
        face,
        cells: [(r, 2), (r, 1), (r, 0)],
    }
}

/// Bordering strips per face, clockwise from the strip above the face.
pub const ADJACENT: [[Strip; 4]; NUM_FACES] = [
    // Face 0: top's left column, face 1's left column, bottom's left column,
    // face 3's right column (read upwards).
    [
        col(TOP_FACE, 0),
        col(1, 0),
        col(BOTTOM_FACE, 0),
        col_rev(3, 2),
    ],
    // Face 1: top's bottom row, face 2's left column, bottom's top row
    // (right to left), face 0's right column (read upwards).
    [
        row(TOP_FACE, 2),
        col(2, 0),
        row_rev(BOTTOM_FACE, 0),
        col_rev(0, 2),
    ],
    // Face 2: top's right column, face 3's left column (read upwards),
    // bottom's right column, face 1's right column.
    [
        col(TOP_FACE, 2),
        col_rev(3, 0),
        col(BOTTOM_FACE, 2),
        col(1, 2),
    ],
    // Face 3: top's top row, face 0's left column (read upwards), bottom's
    // bottom row (right to left), face 2's right column.
    [
        row(TOP_FACE, 0),
        col_rev(0, 0),
        row_rev(BOTTOM_FACE, 2),
        col(2, 2),
    ],
    // Top: row 0 of the sides, cycling 3 -> 2 -> 1 -> 0.
    [row(3, 0), row(2, 0), row(1, 0), row(0, 0)],
    // Bottom: row 2 of the sides, cycling 1 -> 2 -> 3 -> 0.
    [row(1, 2), row(2, 2), row(3, 2), row(0, 2)],
];

/// Strips bordering `face`, clockwise. `face` must already be validated.
pub fn strips(face: usize) -> &'static [Strip; 4] {
    &ADJACENT[face]
}
