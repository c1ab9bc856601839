//! Terminal rendering for the cube.
//!
//! A small, game-oriented rendering layer: views draw into a framebuffer which
//! is then flushed to a terminal backend. There are no widget or layout
//! frameworks involved.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Share one layout between drawing and pointer hit-testing
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per sticker)

pub mod cube_view;
pub mod fb;
pub mod renderer;
pub mod text;

pub use tui_cube_core as core;
pub use tui_cube_types as types;

pub use cube_view::{sticker_rgb, AnchorY, CubeView, NetLayout, PanelInfo, StickerRef, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::render_text;
