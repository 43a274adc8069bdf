//! Player module - the rocket, its resources and its ray
//!
//! Movement is unclamped here: the game loop clamps the position to the
//! playable area once per frame, so a key press can leave the position
//! briefly outside the screen until the next frame.

use std::time::Duration;

use crate::types::{
    Direction, COLLISION_DAMAGE, INITIAL_HEALTH, INITIAL_RAYS, KILL_SCORE, REGEN_HEALTH,
    REGEN_RAYS, SHOT_DURATION_MS,
};

/// Row/column cell position. Signed so movement can step past an edge before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }
}

/// Player state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    position: Position,
    health: i32,
    score: u32,
    rays: u32,
    /// Start time of the active ray, if one is firing.
    shot: Option<Duration>,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            health: INITIAL_HEALTH,
            score: 0,
            rays: INITIAL_RAYS,
            shot: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rays(&self) -> u32 {
        self.rays
    }

    pub fn set_rays(&mut self, rays: u32) {
        self.rays = rays;
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn shot_active(&self) -> bool {
        self.shot.is_some()
    }

    pub fn move_by(&mut self, direction: Direction) {
        let (dr, dc) = direction.delta();
        self.position.row += dr;
        self.position.column += dc;
    }

    /// Clamp into `[0, rows-1] x [0, columns-1]`.
    ///
    /// A zero-sized area clamps to `(0, 0)`.
    pub fn clamp_to(&mut self, rows: u16, columns: u16) {
        self.position.row = self.position.row.min(rows as i32 - 1).max(0);
        self.position.column = self.position.column.min(columns as i32 - 1).max(0);
    }

    /// Start a ray at `now`.
    ///
    /// Returns false (and changes nothing) when out of rays or a ray is
    /// already active.
    pub fn fire_shot(&mut self, now: Duration) -> bool {
        if self.rays == 0 || self.shot.is_some() {
            return false;
        }
        self.rays -= 1;
        self.shot = Some(now);
        true
    }

    /// End the active ray once its lifetime has passed.
    pub fn tick_shot(&mut self, now: Duration) {
        if let Some(start) = self.shot {
            if now.saturating_sub(start) >= Duration::from_millis(SHOT_DURATION_MS) {
                self.shot = None;
            }
        }
    }

    pub fn apply_regeneration(&mut self) {
        self.health += REGEN_HEALTH;
        self.rays += REGEN_RAYS;
    }

    pub fn apply_collision_damage(&mut self) {
        self.health -= COLLISION_DAMAGE;
    }

    pub fn apply_kill(&mut self) {
        self.score += KILL_SCORE;
    }
}
