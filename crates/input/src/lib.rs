//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into [`crate::types::InputEvent`] and exposes the
//! [`InputSource`] seam the game loop polls once per frame. [`ScriptedInput`]
//! stands in for the terminal in headless runs.

pub mod map;
pub mod source;

pub use meteor_mayhem_types as types;

pub use map::{handle_key_event, map_event, should_quit};
pub use source::{CrosstermInput, InputSource, ScriptedInput};
