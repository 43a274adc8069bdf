//! Shared types and constants
//!
//! This crate defines the plain data shared by the game core, the input layer
//! and the terminal view. It has no dependencies, so every other crate in the
//! workspace can use it.
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_HEALTH` | 100 | Health at session start |
//! | `INITIAL_RAYS` | 5 | Ammunition at session start |
//! | `COLLISION_DAMAGE` | 20 | Health lost when a meteor hits the rocket |
//! | `KILL_SCORE` | 5 | Score per meteor destroyed by a ray |
//! | `REGEN_HEALTH` | 10 | Health restored per regeneration tick |
//! | `REGEN_RAYS` | 2 | Rays restored per regeneration tick |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds of wall-clock time:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `METEOR_ADVANCE_MS` | 100 | Meteors fall one row per interval |
//! | `METEOR_SPAWN_MS` | 100 | One spawn attempt per interval |
//! | `SHOT_DURATION_MS` | 100 | How long a ray stays active |
//! | `REGEN_INTERVAL_MS` | 30000 | Regeneration period |
//! | `FRAME_POLL_MS` | 10 | Upper bound on the per-frame input wait |
//!
//! # Examples
//!
//! ```
//! use meteor_mayhem_types::{Direction, GameAction, InputEvent};
//!
//! assert_eq!(Direction::Up.delta(), (-1, 0));
//! assert_eq!(Direction::Left.delta(), (0, -1));
//!
//! let event = InputEvent::Action(GameAction::Move(Direction::Left));
//! assert!(!event.is_quit());
//! assert!(InputEvent::Quit.is_quit());
//! ```

/// Health at the start of a session
pub const INITIAL_HEALTH: i32 = 100;

/// Ammunition at the start of a session
pub const INITIAL_RAYS: u32 = 5;

/// Health lost per collision
pub const COLLISION_DAMAGE: i32 = 20;

/// Score awarded per meteor destroyed by a ray
pub const KILL_SCORE: u32 = 5;

/// Health restored on every regeneration tick
pub const REGEN_HEALTH: i32 = 10;

/// Rays restored on every regeneration tick
pub const REGEN_RAYS: u32 = 2;

/// Interval between meteor advance steps (100ms)
pub const METEOR_ADVANCE_MS: u64 = 100;

/// Interval between meteor spawn attempts (100ms)
pub const METEOR_SPAWN_MS: u64 = 100;

/// Lifetime of a fired ray (100ms)
pub const SHOT_DURATION_MS: u64 = 100;

/// Interval between regeneration ticks (30s)
pub const REGEN_INTERVAL_MS: u64 = 30_000;

/// Longest time a frame waits for input before drawing the next one (10ms)
pub const FRAME_POLL_MS: u64 = 10;


/// The four directions the rocket can move in
///
/// Rows grow downward, so `Up` decreases the row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row/column offset for a single step in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Actions the player can take during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Fire a ray upward from the rocket's column
    Fire,
    /// Move the rocket one cell
    Move(Direction),
}

/// One event read from the input source
///
/// At most one event is produced per frame. "No key pending" is modelled by the
/// caller as `Option::None`, not as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    /// The terminal was resized
    Resize,
    /// The player asked to leave the game
    Quit,
}

impl InputEvent {
    pub fn is_quit(&self) -> bool {
        matches!(self, InputEvent::Quit)
    }
}
