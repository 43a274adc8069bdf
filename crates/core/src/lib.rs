//! Core game logic module - pure and testable
//!
//! This crate contains the rules of the game and the per-frame simulation. It
//! has no dependency on the terminal, so every step can be driven from tests
//! with a [`ManualClock`](clock::ManualClock).
//!
//! # Module Structure
//!
//! - [`clock`]: time source trait and the periodic [`Timer`]
//! - [`field`]: the meteor columns
//! - [`player`]: rocket position, health, rays, score and the active ray
//! - [`game_state`]: the frame update and input dispatch
//!
//! # Game Rules
//!
//! - Meteors fall one row every 100ms and one spawn attempt is made every 100ms
//! - A meteor reaching the rocket costs 20 health
//! - A ray destroys the meteor in the rocket's column above it for 5 points
//! - Every 30s the rocket regains 10 health and 2 rays
//! - The game ends when health reaches 0 or the player quits
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use meteor_mayhem_core::{GameState, Playfield};
//! use meteor_mayhem_types::{GameAction, InputEvent};
//!
//! let mut game = GameState::new(42, 24, 80, Duration::ZERO);
//!
//! game.dispatch(InputEvent::Action(GameAction::Fire), Duration::ZERO);
//! let report = game.update(Duration::from_millis(16), Playfield::new(23, 80));
//!
//! assert!(report.ray.is_some());
//! assert_eq!(game.player().rays(), 4);
//! ```

pub mod clock;
pub mod field;
pub mod game_state;
pub mod player;

pub use meteor_mayhem_types as types;

pub use clock::{Clock, ManualClock, SystemClock, Timer};
pub use field::MeteorField;
pub use game_state::{EndReason, FrameReport, GameState, GameStatus, Playfield, RayTrail};
pub use player::{Player, Position};
