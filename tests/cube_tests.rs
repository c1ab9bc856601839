//! Cube engine tests - rotation geometry, edits and shuffling

use tui_cube::core::{Cube, CubeError, FaceGrid, SimpleRng};
use tui_cube::types::{Color, CANONICAL_COLORS, DEFAULT_SHUFFLE_MOVES, NUM_FACES};

fn uniform(color: Color) -> FaceGrid {
    [[color; 3]; 3]
}

fn column(cube: &Cube, face: usize, col: usize) -> [Color; 3] {
    cube.column(face, col).unwrap()
}

fn row(cube: &Cube, face: usize, r: usize) -> [Color; 3] {
    cube.face(face).unwrap()[r]
}

/// Assert every sticker of `face` outside the listed cells still has its canonical color.
fn assert_untouched_except(cube: &Cube, face: usize, touched: &[(usize, usize)]) {
    let home = CANONICAL_COLORS[face];
    for r in 0..3 {
        for c in 0..3 {
            if !touched.contains(&(r, c)) {
                assert_eq!(cube.get(face, r, c).unwrap(), home, "face {face} ({r},{c})");
            }
        }
    }
}

// ============== Construction ==============

#[test]
fn test_new_cube_is_solved() {
    let cube = Cube::new();
    for face in 0..NUM_FACES {
        assert_eq!(*cube.face(face).unwrap(), uniform(CANONICAL_COLORS[face]));
    }
    assert!(cube.is_solved());
    assert_eq!(cube.rotation_count(), 0);
}

#[test]
fn test_canonical_colors() {
    assert_eq!(
        CANONICAL_COLORS,
        [
            Color::Red,
            Color::Blue,
            Color::Orange,
            Color::Green,
            Color::White,
            Color::Yellow
        ]
    );
    assert_eq!(tui_cube::core::canonical_color(3), Ok(Color::Green));
    assert!(tui_cube::core::canonical_color(6).is_err());
}

// ============== Side face turns ==============

#[test]
fn test_face_0_clockwise_on_solved_cube() {
    let mut cube = Cube::new();
    cube.rotate(0, true).unwrap();

    // Turned face is monochrome, so it is unchanged.
    assert_eq!(*cube.face(0).unwrap(), uniform(Color::Red));

    // top -> right -> bottom -> left
    assert_eq!(column(&cube, 1, 0), [Color::White; 3]);
    assert_eq!(column(&cube, 5, 0), [Color::Blue; 3]);
    assert_eq!(column(&cube, 3, 2), [Color::Yellow; 3]);
    assert_eq!(column(&cube, 4, 0), [Color::Green; 3]);

    let col0 = [(0, 0), (1, 0), (2, 0)];
    let col2 = [(0, 2), (1, 2), (2, 2)];
    assert_untouched_except(&cube, 1, &col0);
    assert_untouched_except(&cube, 5, &col0);
    assert_untouched_except(&cube, 3, &col2);
    assert_untouched_except(&cube, 4, &col0);
    assert_untouched_except(&cube, 2, &[]);
}

#[test]
fn test_face_0_counter_clockwise_on_solved_cube() {
    let mut cube = Cube::new();
    cube.rotate(0, false).unwrap();

    // bottom -> right, right -> top, top -> left, left -> bottom
    assert_eq!(column(&cube, 1, 0), [Color::Yellow; 3]);
    assert_eq!(column(&cube, 4, 0), [Color::Blue; 3]);
    assert_eq!(column(&cube, 3, 2), [Color::White; 3]);
    assert_eq!(column(&cube, 5, 0), [Color::Green; 3]);
}

#[test]
fn test_face_1_clockwise_touches_top_row_2_and_bottom_row_0() {
    let mut cube = Cube::new();
    cube.rotate(1, true).unwrap();

    assert_eq!(column(&cube, 2, 0), [Color::White; 3]);
    assert_eq!(row(&cube, 5, 0), [Color::Orange; 3]);
    assert_eq!(column(&cube, 0, 2), [Color::Yellow; 3]);
    assert_eq!(row(&cube, 4, 2), [Color::Red; 3]);
    assert_untouched_except(&cube, 3, &[]);
}

#[test]
fn test_face_2_clockwise_touches_right_columns() {
    let mut cube = Cube::new();
    cube.rotate(2, true).unwrap();

    assert_eq!(column(&cube, 3, 0), [Color::White; 3]);
    assert_eq!(column(&cube, 5, 2), [Color::Green; 3]);
    assert_eq!(column(&cube, 1, 2), [Color::Yellow; 3]);
    assert_eq!(column(&cube, 4, 2), [Color::Blue; 3]);
    assert_untouched_except(&cube, 0, &[]);
}

#[test]
fn test_face_3_clockwise_touches_top_row_0_and_bottom_row_2() {
    let mut cube = Cube::new();
    cube.rotate(3, true).unwrap();

    // Ring wraps: face 3's right neighbour is face 0.
    assert_eq!(column(&cube, 0, 0), [Color::White; 3]);
    assert_eq!(row(&cube, 5, 2), [Color::Red; 3]);
    assert_eq!(column(&cube, 2, 2), [Color::Yellow; 3]);
    assert_eq!(row(&cube, 4, 0), [Color::Orange; 3]);
    assert_untouched_except(&cube, 1, &[]);
}

#[test]
fn test_strip_orientation_is_preserved_between_row_and_column_faces() {
    // Mark one corner of the top face and follow it through a face 1 turn.
    let mut cube = Cube::new();
    cube.set_cell(4, 2, 0, Color::Rgb(1, 1, 1)).unwrap();
    cube.rotate(1, true).unwrap();
    // Top row 2 maps onto face 2's left column, first cell to first cell.
    assert_eq!(cube.get(2, 0, 0).unwrap(), Color::Rgb(1, 1, 1));

    cube.rotate(1, true).unwrap();
    // Face 2's left column lands on bottom row 0 right-to-left.
    assert_eq!(cube.get(5, 0, 2).unwrap(), Color::Rgb(1, 1, 1));
}

// ============== Top / bottom turns ==============

#[test]
fn test_top_clockwise_on_solved_cube() {
    let mut cube = Cube::new();
    cube.rotate(4, true).unwrap();

    assert_eq!(row(&cube, 2, 0), [Color::Green; 3]);
    assert_eq!(row(&cube, 1, 0), [Color::Orange; 3]);
    assert_eq!(row(&cube, 0, 0), [Color::Blue; 3]);
    assert_eq!(row(&cube, 3, 0), [Color::Red; 3]);

    let row0 = [(0, 0), (0, 1), (0, 2)];
    for face in 0..4 {
        assert_untouched_except(&cube, face, &row0);
    }
    assert_eq!(*cube.face(5).unwrap(), uniform(Color::Yellow));
    assert_eq!(*cube.face(4).unwrap(), uniform(Color::White));
}

#[test]
fn test_bottom_clockwise_on_solved_cube() {
    let mut cube = Cube::new();
    cube.rotate(5, true).unwrap();

    assert_eq!(row(&cube, 2, 2), [Color::Blue; 3]);
    assert_eq!(row(&cube, 3, 2), [Color::Orange; 3]);
    assert_eq!(row(&cube, 0, 2), [Color::Green; 3]);
    assert_eq!(row(&cube, 1, 2), [Color::Red; 3]);

    let row2 = [(2, 0), (2, 1), (2, 2)];
    for face in 0..4 {
        assert_untouched_except(&cube, face, &row2);
    }
    assert_eq!(*cube.face(4).unwrap(), uniform(Color::White));
}

// ============== Group properties ==============

#[test]
fn test_inverse_and_four_fold_on_scrambled_cube() {
    let mut cube = Cube::with_seed(77);
    cube.shuffle(40);
    let start = cube.clone();

    for face in 0..NUM_FACES {
        cube.rotate(face, true).unwrap();
        cube.rotate(face, false).unwrap();
        assert_eq!(cube, start, "face {face}");

        for _ in 0..4 {
            cube.rotate(face, false).unwrap();
        }
        assert_eq!(cube, start, "face {face}");
    }
}

#[test]
fn test_sexy_move_has_order_six() {
    // (R U R' U')^6 is the identity on a real cube; catches wrong-handed strips.
    let mut cube = Cube::new();
    for _ in 0..6 {
        cube.rotate(2, true).unwrap();
        cube.rotate(4, true).unwrap();
        cube.rotate(2, false).unwrap();
        cube.rotate(4, false).unwrap();
    }
    assert!(cube.is_solved());
}

#[test]
fn test_opposite_faces_commute() {
    for (a, b) in [(0, 2), (1, 3), (4, 5)] {
        let mut ab = Cube::with_seed(5);
        ab.shuffle(20);
        let mut ba = ab.clone();

        ab.rotate(a, true).unwrap();
        ab.rotate(b, false).unwrap();
        ba.rotate(b, false).unwrap();
        ba.rotate(a, true).unwrap();
        assert_eq!(ab, ba, "faces {a} and {b}");
    }
}

// ============== Validation ==============

#[test]
fn test_invalid_face_is_rejected_without_change() {
    let mut cube = Cube::with_seed(9);
    cube.shuffle(5);
    let before = cube.clone();

    assert_eq!(cube.rotate(6, true), Err(CubeError::InvalidFace { face: 6 }));
    assert!(cube.rotate(usize::MAX, false).is_err());
    assert_eq!(cube, before);
    assert_eq!(cube.rotation_count(), 5);
}

#[test]
fn test_invalid_indices_are_rejected() {
    let mut cube = Cube::new();
    assert!(cube.set_cell(0, 3, 0, Color::Red).is_err());
    assert!(cube.set_cell(0, 0, 3, Color::Red).is_err());
    assert!(cube.set_cell(6, 0, 0, Color::Red).is_err());
    assert!(cube.get(0, 0, 3).is_err());
    assert!(cube.face(7).is_err());
    assert!(cube.is_solved());
}

// ============== Manual edits ==============

#[test]
fn test_center_is_immutable() {
    let mut cube = Cube::with_seed(3);
    cube.shuffle(12);
    let before = cube.clone();
    for face in 0..NUM_FACES {
        assert_eq!(cube.set_cell(face, 1, 1, Color::Rgb(0, 0, 0)), Ok(false));
    }
    assert_eq!(cube, before);
}

#[test]
fn test_set_cell_accepts_any_color() {
    let mut cube = Cube::new();
    assert_eq!(cube.set_cell(2, 0, 2, Color::Rgb(10, 20, 30)), Ok(true));
    assert_eq!(cube.set_cell(2, 2, 0, Color::White), Ok(true));
    assert_eq!(cube.get(2, 0, 2).unwrap(), Color::Rgb(10, 20, 30));
    assert_eq!(cube.get(2, 2, 0).unwrap(), Color::White);
    assert!(!cube.is_solved());
}

#[test]
fn test_painted_sticker_travels_with_rotation() {
    let mut cube = Cube::new();
    let marker = Color::Rgb(200, 0, 200);
    cube.set_cell(0, 0, 0, marker).unwrap();
    cube.rotate(0, true).unwrap();
    // (0,0) -> (0,2) on a clockwise turn.
    assert_eq!(cube.get(0, 0, 2).unwrap(), marker);
    assert_eq!(cube.get(0, 0, 0).unwrap(), Color::Red);
}

// ============== Shuffle ==============

#[test]
fn test_shuffle_zero_is_noop() {
    let mut cube = Cube::with_seed(42);
    cube.shuffle(0);
    assert!(cube.is_solved());
    assert_eq!(cube.rotation_count(), 0);
}

#[test]
fn test_shuffle_performs_exactly_n_rotations() {
    for n in [1, 7, DEFAULT_SHUFFLE_MOVES] {
        let mut cube = Cube::with_seed(11);
        cube.shuffle(n);
        assert_eq!(cube.rotation_count(), n);
    }
}

#[test]
fn test_shuffle_is_deterministic_per_seed() {
    let mut a = Cube::with_seed(1234);
    let mut b = Cube::with_seed(1234);
    a.shuffle(DEFAULT_SHUFFLE_MOVES);
    b.shuffle(DEFAULT_SHUFFLE_MOVES);
    assert_eq!(a, b);
    assert!(!a.is_solved());

    let mut c = Cube::with_seed(4321);
    c.shuffle(DEFAULT_SHUFFLE_MOVES);
    assert_ne!(a, c);
}

#[test]
fn test_shuffle_with_injected_rng_matches_own_rng() {
    let mut own = Cube::with_seed(55);
    own.shuffle(30);

    let mut injected = Cube::new();
    let mut rng = SimpleRng::new(55);
    injected.shuffle_with(30, &mut rng);

    assert_eq!(own, injected);
}

#[test]
fn test_consecutive_shuffles_continue_the_sequence() {
    let mut split = Cube::with_seed(8);
    split.shuffle(10);
    split.shuffle(15);

    let mut whole = Cube::with_seed(8);
    whole.shuffle(25);

    assert_eq!(split, whole);
}

#[test]
fn test_reset_restores_solved_state() {
    let mut cube = Cube::with_seed(2);
    cube.shuffle(30);
    cube.set_cell(1, 0, 0, Color::Rgb(1, 2, 3)).unwrap();
    cube.reset();
    assert_eq!(cube, Cube::new());
    assert_eq!(cube.rotation_count(), 0);
}
