//! Terminal rendering for the kana board.
//!
//! Rendering happens in two steps: [`GameView`] paints a campaign snapshot into a
//! plain [`FrameBuffer`] (pure, unit-testable), then [`TerminalRenderer`] diffs
//! and flushes it through crossterm.
//!
//! Kana are double-width in terminals, so the framebuffer tracks glyph width.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use kana_merge_core as core;
pub use kana_merge_types as types;

pub use fb::{char_width, str_width, Cell, CellStyle, FrameBuffer, Rgb, WIDE_CONTINUATION};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
