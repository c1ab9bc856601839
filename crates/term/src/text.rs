//! Plain-text rendering of the cube net, one letter per sticker.
//!
//! Used by the headless `print` command and handy in test failure output.

use crate::core::CubeSnapshot;
use crate::types::{BOTTOM_FACE, FACE_DIM, RING_FACES, TOP_FACE};

/// Render the net as text. Non-canonical colors print as `?`.
///
/// ```
/// use tui_cube_core::Cube;
/// use tui_cube_term::render_text;
///
/// let text = render_text(&Cube::new().snapshot());
/// assert_eq!(text.lines().next(), Some("    WWW"));
/// assert_eq!(text.lines().nth(3), Some("RRR BBB OOO GGG"));
/// ```
pub fn render_text(snap: &CubeSnapshot) -> String {
    let indent = " ".repeat(FACE_DIM + 1);
    let row_of = |face: usize, row: usize| -> String {
        snap.faces[face][row].iter().map(|c| c.letter()).collect()
    };

    let mut lines = Vec::with_capacity(3 * FACE_DIM);
    for row in 0..FACE_DIM {
        lines.push(format!("{indent}{}", row_of(TOP_FACE, row)));
    }
    for row in 0..FACE_DIM {
        let band: Vec<String> = (0..RING_FACES).map(|face| row_of(face, row)).collect();
        lines.push(band.join(" "));
    }
    for row in 0..FACE_DIM {
        lines.push(format!("{indent}{}", row_of(BOTTOM_FACE, row)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
