//! Cube module - the six-face sticker state and its legal transformations
//!
//! State is `faces[face][row][col]`. Rotations are permutations of the 54
//! stickers; [`Cube::set_cell`] is the only way to introduce or remove a color.

use tracing::{debug, trace};

use crate::adjacency::{self, Strip};
use crate::error::{check_face, check_index, Axis, CubeError};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::CubeSnapshot;
use crate::types::{
    Color, CubeAction, CANONICAL_COLORS, CENTER, DEFAULT_SHUFFLE_MOVES, FACE_DIM, NUM_FACES,
};

/// One face: 3 rows of 3 stickers
pub type FaceGrid = [[Color; FACE_DIM]; FACE_DIM];

/// Canonical color of a face
pub fn canonical_color(face: usize) -> Result<Color, CubeError> {
    Ok(CANONICAL_COLORS[check_face(face)?])
}

fn solved_faces() -> [FaceGrid; NUM_FACES] {
    CANONICAL_COLORS.map(|c| [[c; FACE_DIM]; FACE_DIM])
}

/// Quarter-turn of a single grid. Clockwise sends (i, j) to (j, 2 - i).
fn turn_grid(grid: &FaceGrid, clockwise: bool) -> FaceGrid {
    let mut out = *grid;
    for i in 0..FACE_DIM {
        for j in 0..FACE_DIM {
            if clockwise {
                out[j][FACE_DIM - 1 - i] = grid[i][j];
            } else {
                out[FACE_DIM - 1 - j][i] = grid[i][j];
            }
        }
    }
    out
}

/// The cube engine
#[derive(Debug, Clone)]
pub struct Cube {
    faces: [FaceGrid; NUM_FACES],
    rng: SimpleRng,
    rotations: u32,
}

impl Cube {
    /// Create a solved cube with the default RNG seed
    pub fn new() -> Self {
        Self::with_seed(1)
    }

    /// Create a solved cube whose shuffles are driven by `seed`
    pub fn with_seed(seed: u32) -> Self {
        Self {
            faces: solved_faces(),
            rng: SimpleRng::new(seed),
            rotations: 0,
        }
    }

    /// Build a cube from explicit face grids (for tests and external editors)
    pub fn from_faces(faces: [FaceGrid; NUM_FACES]) -> Self {
        Self {
            faces,
            rng: SimpleRng::default(),
            rotations: 0,
        }
    }

    /// Re-initialize to the solved state. The RNG keeps its position.
    pub fn reset(&mut self) {
        debug!(rotations = self.rotations, "cube reset");
        self.faces = solved_faces();
        self.rotations = 0;
    }

    /// All six faces
    pub fn faces(&self) -> &[FaceGrid; NUM_FACES] {
        &self.faces
    }

    /// Read-only view of one face
    pub fn face(&self, face: usize) -> Result<&FaceGrid, CubeError> {
        Ok(&self.faces[check_face(face)?])
    }

    /// Sticker at (face, row, col)
    pub fn get(&self, face: usize, row: usize, col: usize) -> Result<Color, CubeError> {
        let grid = self.face(face)?;
        Ok(grid[check_index(Axis::Row, row)?][check_index(Axis::Col, col)?])
    }

    /// Column `col` of `face`, top to bottom
    pub fn column(&self, face: usize, col: usize) -> Result<[Color; FACE_DIM], CubeError> {
        let grid = self.face(face)?;
        let col = check_index(Axis::Col, col)?;
        Ok([grid[0][col], grid[1][col], grid[2][col]])
    }

    /// Number of rotations applied since construction or the last reset
    pub fn rotation_count(&self) -> u32 {
        self.rotations
    }

    /// True when every face is a single color matching its center
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|grid| {
            let center = grid[CENTER][CENTER];
            grid.iter().flatten().all(|&c| c == center)
        })
    }

    /// Quarter-turn `face` clockwise or counter-clockwise.
    ///
    /// Turns the face's own grid and cycles the four bordering strips of its
    /// neighbours. Rejects an invalid face without touching any state.
    pub fn rotate(&mut self, face: usize, clockwise: bool) -> Result<(), CubeError> {
        let face = check_face(face)?;
        self.turn(face, clockwise);
        Ok(())
    }

    /// Quarter-turn an already validated face.
    fn turn(&mut self, face: usize, clockwise: bool) {
        self.faces[face] = turn_grid(&self.faces[face], clockwise);

        let strips = *adjacency::strips(face);
        // Strips share storage with one another's faces; read all four first.
        let before = strips.map(|s| self.read_strip(&s));
        for (k, strip) in strips.iter().enumerate() {
            let src = if clockwise { (k + 3) % 4 } else { (k + 1) % 4 };
            self.write_strip(strip, before[src]);
        }

        self.rotations = self.rotations.wrapping_add(1);
        trace!(face, clockwise, "rotate");
    }

    fn read_strip(&self, strip: &Strip) -> [Color; FACE_DIM] {
        let grid = &self.faces[strip.face];
        strip.cells.map(|(r, c)| grid[r][c])
    }

    fn write_strip(&mut self, strip: &Strip, values: [Color; FACE_DIM]) {
        let grid = &mut self.faces[strip.face];
        for (&(r, c), v) in strip.cells.iter().zip(values) {
            grid[r][c] = v;
        }
    }

    /// Overwrite one sticker.
    ///
    /// The center sticker anchors the face's identity and is never changed:
    /// writing it is a no-op that returns `Ok(false)`. Any color is accepted.
    pub fn set_cell(
        &mut self,
        face: usize,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<bool, CubeError> {
        let face = check_face(face)?;
        let row = check_index(Axis::Row, row)?;
        let col = check_index(Axis::Col, col)?;
        if row == CENTER && col == CENTER {
            return Ok(false);
        }
        self.faces[face][row][col] = color;
        Ok(true)
    }

    /// Apply `count` random quarter turns using the cube's own RNG
    pub fn shuffle(&mut self, count: u32) {
        let mut rng = std::mem::take(&mut self.rng);
        self.shuffle_with(count, &mut rng);
        self.rng = rng;
    }

    /// Apply `count` random quarter turns drawn from `rng`.
    ///
    /// Each turn picks a uniform face and a uniform direction; cancelling
    /// pairs are kept as drawn.
    pub fn shuffle_with<R: RandomSource>(&mut self, count: u32, rng: &mut R) {
        debug!(count, "shuffle");
        for _ in 0..count {
            let face = rng.next_range(NUM_FACES as u32) as usize;
            let clockwise = rng.next_bool();
            self.turn(face, clockwise);
        }
    }

    /// Dispatch a controller action
    pub fn apply_action(&mut self, action: CubeAction) -> Result<(), CubeError> {
        match action {
            CubeAction::Rotate { face, clockwise } => self.rotate(face, clockwise),
            CubeAction::Shuffle => {
                self.shuffle(DEFAULT_SHUFFLE_MOVES);
                Ok(())
            }
            CubeAction::Reset => {
                self.reset();
                Ok(())
            }
            CubeAction::Paint {
                face,
                row,
                col,
                color,
            } => self.set_cell(face, row, col, color).map(|_| ()),
        }
    }

    /// Copy the current state into a plain snapshot for rendering
    pub fn snapshot(&self) -> CubeSnapshot {
        CubeSnapshot {
            faces: self.faces,
            rotations: self.rotations,
            solved: self.is_solved(),
        }
    }

    /// Fill an existing snapshot without allocating
    pub fn snapshot_into(&self, snap: &mut CubeSnapshot) {
        snap.faces = self.faces;
        snap.rotations = self.rotations;
        snap.solved = self.is_solved();
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Cube {
    /// Cubes compare by sticker layout only
    fn eq(&self, other: &Self) -> bool {
        self.faces == other.faces
    }
}

impl Eq for Cube {}
