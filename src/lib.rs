//! tui-cube (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, integration
//! tests and benches can use `tui_cube::{core, input, term, types}`.

pub use tui_cube_core as core;
pub use tui_cube_input as input;
pub use tui_cube_term as term;
pub use tui_cube_types as types;
