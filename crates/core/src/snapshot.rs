//! Plain-data copy of the cube for renderers and the JSON dump.

use serde::Serialize;

use crate::cube::FaceGrid;
use crate::types::{CANONICAL_COLORS, CENTER, FACE_DIM, NUM_FACES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CubeSnapshot {
    pub faces: [FaceGrid; NUM_FACES],
    pub rotations: u32,
    pub solved: bool,
}

impl CubeSnapshot {
    pub fn clear(&mut self) {
        self.faces = CANONICAL_COLORS.map(|c| [[c; FACE_DIM]; FACE_DIM]);
        self.rotations = 0;
        self.solved = true;
    }

    /// Number of stickers on each face that differ from its center
    pub fn misplaced(&self) -> [usize; NUM_FACES] {
        self.faces.map(|grid| {
            let center = grid[CENTER][CENTER];
            grid.iter().flatten().filter(|&&c| c != center).count()
        })
    }
}

impl Default for CubeSnapshot {
    fn default() -> Self {
        let mut s = Self {
            faces: [[[CANONICAL_COLORS[0]; FACE_DIM]; FACE_DIM]; NUM_FACES],
            rotations: 0,
            solved: true,
        };
        s.clear();
        s
    }
}
