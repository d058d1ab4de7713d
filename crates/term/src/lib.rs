//! Terminal presentation layer.
//!
//! Renders between-tick game snapshots into a character framebuffer and
//! flushes it to a terminal. The core stays deterministic and testable;
//! everything in this crate is a pure view over [`gridfall_core::GameSnapshot`]
//! except the final flush to stdout.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
