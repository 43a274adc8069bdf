//! Input sources: where the game loop reads its one event per frame.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event;

use crate::map::map_event;
use crate::types::{InputEvent, FRAME_POLL_MS};

/// Non-blocking event source.
pub trait InputSource {
    /// Return the next pending event, or `None` when nothing is pending.
    fn poll_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Reads events from the terminal through crossterm.
///
/// Each poll waits at most `poll_timeout` and returns as soon as an event is
/// available. Events that do not map to game input (mouse, focus, key release)
/// are consumed and reported as `None`.
#[derive(Debug, Clone)]
pub struct CrosstermInput {
    poll_timeout: Duration,
}

impl CrosstermInput {
    pub fn new() -> Self {
        Self::with_poll_timeout(Duration::from_millis(FRAME_POLL_MS))
    }

    pub fn with_poll_timeout(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }

    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout
    }
}

impl Default for CrosstermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for CrosstermInput {
    fn poll_event(&mut self) -> Result<Option<InputEvent>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }
        Ok(map_event(event::read()?))
    }
}

/// Pre-recorded input, one entry per frame.
///
/// `None` entries are frames with no key pressed. Once the script runs out,
/// every poll reports no event.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Option<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn push(&mut self, frame: Option<InputEvent>) {
        self.frames.push_back(frame);
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.frames.pop_front().flatten())
    }
}
