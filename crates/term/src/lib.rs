//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a [`GameView`] paints a session
//! into a [`FrameBuffer`] of styled glyphs, and a [`TerminalRenderer`] flushes
//! that buffer to a crossterm backend. No widget toolkit is involved.
//!
//! - Keeps `core` free of any terminal concern
//! - Allows precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Ink, Rgb, Weight};
pub use game_view::{group_rgb, AnchorY, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
