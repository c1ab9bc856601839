//! Terminal input module.
//!
//! Independent of any UI framework: maps `crossterm` key and mouse events into
//! [`crate::types::CubeAction`]s and UI commands. Turning a click position into
//! a sticker is left to the view, which owns the layout.

pub mod map;

pub use tui_cube_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit, InputCommand};
