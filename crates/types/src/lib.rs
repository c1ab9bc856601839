//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behaviour beyond parsing and naming, so they
//! can be shared by the engine, the terminal view and the input layer.
//!
//! # Cube Layout
//!
//! Six faces, each a 3x3 grid of stickers, indexed 0-5:
//!
//! | Face | Canonical color | Position |
//! |------|-----------------|----------|
//! | 0 | Red | side ring, left of face 1 |
//! | 1 | Blue | side ring, front |
//! | 2 | Orange | side ring, right of face 1 |
//! | 3 | Green | side ring, back |
//! | 4 | White | top |
//! | 5 | Yellow | bottom |
//!
//! Side faces 0-3 form a ring (neighbours are index +/- 1 mod 4). The top and
//! bottom faces touch every side face and never each other.
//!
//! # Examples
//!
//! ```
//! use tui_cube_types::{Color, CubeAction, CANONICAL_COLORS, NUM_FACES};
//!
//! assert_eq!(NUM_FACES, 6);
//! assert_eq!(CANONICAL_COLORS[4], Color::White);
//!
//! // Parse a color (case-insensitive)
//! assert_eq!(Color::from_str("Orange"), Some(Color::Orange));
//! assert_eq!(Color::from_str("#ff00aa"), Some(Color::Rgb(255, 0, 170)));
//!
//! // Parse move notation: face letter, optional prime for counter-clockwise
//! let action = CubeAction::from_str("b'").unwrap();
//! assert_eq!(action, CubeAction::Rotate { face: 1, clockwise: false });
//! assert_eq!(action.as_str(), "b'");
//! ```

use serde::{Deserialize, Serialize};

/// Number of faces on the cube
pub const NUM_FACES: usize = 6;

/// Number of side faces forming the ring (faces 0-3)
pub const RING_FACES: usize = 4;

/// Stickers per face edge (3x3 grid)
pub const FACE_DIM: usize = 3;

/// Row/column index of the immutable center sticker
pub const CENTER: usize = 1;

/// Index of the top face
pub const TOP_FACE: usize = 4;

/// Index of the bottom face
pub const BOTTOM_FACE: usize = 5;

/// Default number of random rotations applied by a shuffle
pub const DEFAULT_SHUFFLE_MOVES: u32 = 50;

/// Canonical color of each face, indexed by face
pub const CANONICAL_COLORS: [Color; NUM_FACES] = [
    Color::Red,
    Color::Blue,
    Color::Orange,
    Color::Green,
    Color::White,
    Color::Yellow,
];

/// A sticker color
///
/// The six named variants are the canonical face colors. `Rgb` holds any other
/// color assigned through a manual edit; the engine never produces one itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Orange,
    Green,
    White,
    Yellow,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color from a name, a single letter, or `#rrggbb` (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_cube_types::Color;
    ///
    /// assert_eq!(Color::from_str("red"), Some(Color::Red));
    /// assert_eq!(Color::from_str("W"), Some(Color::White));
    /// assert_eq!(Color::from_str("#102030"), Some(Color::Rgb(16, 32, 48)));
    /// assert_eq!(Color::from_str("purple"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "red" | "r" => Some(Color::Red),
            "blue" | "b" => Some(Color::Blue),
            "orange" | "o" => Some(Color::Orange),
            "green" | "g" => Some(Color::Green),
            "white" | "w" => Some(Color::White),
            "yellow" | "y" => Some(Color::Yellow),
            hex => parse_hex(hex),
        }
    }

    /// Lowercase name of a canonical color, or `"rgb"` for custom colors
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Rgb(..) => "rgb",
        }
    }

    /// Single-letter label used by move notation and the text net.
    ///
    /// Custom colors have no face of their own and render as `?`.
    pub fn letter(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Rgb(..) => '?',
        }
    }

    /// Face whose canonical color this is, if any
    pub fn home_face(&self) -> Option<usize> {
        CANONICAL_COLORS.iter().position(|c| c == self)
    }
}

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Actions a controller can apply to the cube
///
/// These are produced by key mapping, by the move-notation parser, and by the
/// pointer hit-test (for `Paint`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeAction {
    /// Quarter-turn one face
    Rotate { face: usize, clockwise: bool },
    /// Apply the default number of random rotations
    Shuffle,
    /// Return to the solved state
    Reset,
    /// Recolor a single sticker
    Paint {
        face: usize,
        row: usize,
        col: usize,
        color: Color,
    },
}

impl CubeAction {
    /// Parse a single notation token
    ///
    /// A face letter (`r b o g w y`, the canonical color initials) turns that
    /// face clockwise; a trailing `'` makes it counter-clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_cube_types::CubeAction;
    ///
    /// assert_eq!(CubeAction::from_str("W"), Some(CubeAction::Rotate { face: 4, clockwise: true }));
    /// assert_eq!(CubeAction::from_str("y'"), Some(CubeAction::Rotate { face: 5, clockwise: false }));
    /// assert_eq!(CubeAction::from_str("shuffle"), Some(CubeAction::Shuffle));
    /// assert_eq!(CubeAction::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "shuffle" => return Some(CubeAction::Shuffle),
            "reset" => return Some(CubeAction::Reset),
            _ => {}
        }

        let (letter, clockwise) = match lower.strip_suffix('\'') {
            Some(rest) => (rest, false),
            None => (lower.as_str(), true),
        };
        if letter.chars().count() != 1 {
            return None;
        }
        let face = Color::from_str(letter)?.home_face()?;
        Some(CubeAction::Rotate { face, clockwise })
    }

    /// Canonical notation for this action
    pub fn as_str(&self) -> &'static str {
        match *self {
            CubeAction::Rotate { face, clockwise } => {
                const CW: [&str; NUM_FACES] = ["r", "b", "o", "g", "w", "y"];
                const CCW: [&str; NUM_FACES] = ["r'", "b'", "o'", "g'", "w'", "y'"];
                let table = if clockwise { &CW } else { &CCW };
                table.get(face).copied().unwrap_or("?")
            }
            CubeAction::Shuffle => "shuffle",
            CubeAction::Reset => "reset",
            CubeAction::Paint { .. } => "paint",
        }
    }

    /// Parse a whitespace-separated move sequence, failing on the first bad token
    ///
    /// Returns the offending token on failure.
    pub fn parse_sequence(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .map(|tok| Self::from_str(tok).ok_or_else(|| tok.to_string()))
            .collect()
    }
}
