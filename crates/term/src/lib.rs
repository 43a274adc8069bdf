//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! The view renders into a simple framebuffer that a [`RenderSurface`]
//! flushes to its display.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Resolve the glyph set once ([`Theme`]) instead of branching while drawing
//! - Only write changed cells to the terminal

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;
pub mod theme;

pub use meteor_mayhem_core as core;
pub use meteor_mayhem_types as types;

pub use fb::{Cell, CellStyle, Color, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::{MemorySurface, RenderSurface, TerminalSurface};
pub use theme::Theme;
