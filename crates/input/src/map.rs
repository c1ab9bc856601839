//! Key mapping from terminal events to cube actions.

use crate::types::{Color, CubeAction, CANONICAL_COLORS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Forward to the cube.
    Cube(CubeAction),
    /// Change the color used by click-to-paint.
    SelectBrush(Color),
}

/// Map keyboard input to commands.
///
/// Face letters are the canonical color initials: lowercase turns the face
/// clockwise, uppercase counter-clockwise.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(ch @ ('r' | 'b' | 'o' | 'g' | 'w' | 'y' | 'R' | 'B' | 'O' | 'G' | 'W' | 'Y')) => {
            let face = Color::from_str(&ch.to_string())?.home_face()?;
            Some(InputCommand::Cube(CubeAction::Rotate {
                face,
                clockwise: ch.is_ascii_lowercase(),
            }))
        }

        KeyCode::Char(' ') => Some(InputCommand::Cube(CubeAction::Shuffle)),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(InputCommand::Cube(CubeAction::Reset)),

        // Brush selection: digit = face number + 1
        KeyCode::Char(d @ '1'..='6') => {
            let face = d as usize - '1' as usize;
            Some(InputCommand::SelectBrush(CANONICAL_COLORS[face]))
        }

        _ => None,
    }
}

/// Position of a left-button press, if this event is one.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
