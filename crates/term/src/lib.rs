//! Terminal renderer for the Columns well.
//!
//! Rather than pulling in a widget toolkit, the game is drawn into a plain
//! framebuffer which is then flushed to the terminal in changed runs.
//! Jewels are two characters wide to keep the well roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use columns_core as core;
pub use columns_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{jewel_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
