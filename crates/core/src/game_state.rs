//! Game state module - the frame update split into testable steps
//!
//! [`GameState`] owns the player, the meteor field, the periodic timers and the
//! spawn RNG. [`GameState::update`] runs the simulation half of one frame in a
//! fixed order:
//!
//! 1. sync the field width with the screen
//! 2. advance and spawn meteors on their timers
//! 3. clamp the player into the playable area
//! 4. trace an active ray upward, destroying the meteor it meets
//! 5. regenerate health and rays on the 30s timer
//! 6. resolve a collision between the rocket and a meteor
//!
//! Each step is also public so it can be exercised on its own. Input is applied
//! separately through [`GameState::dispatch`] after the frame has been drawn.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::Timer;
use crate::field::MeteorField;
use crate::player::{Player, Position};
use crate::types::{
    GameAction, InputEvent, METEOR_ADVANCE_MS, METEOR_SPAWN_MS, REGEN_INTERVAL_MS,
};

/// Area available to meteors and the rocket (the screen minus any status row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub rows: u16,
    pub columns: u16,
}

impl Playfield {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self { rows, columns }
    }

    /// Playable area for a screen, optionally giving up the bottom row to the
    /// status line.
    pub fn from_screen(rows: u16, columns: u16, reserve_status_row: bool) -> Self {
        let rows = if reserve_status_row {
            rows.saturating_sub(1)
        } else {
            rows
        };
        Self { rows, columns }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Quit,
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(EndReason),
}

/// Cells covered by the ray this frame: `column`, rows `0..end_row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayTrail {
    pub column: u16,
    pub end_row: u16,
}

/// What happened during one [`GameState::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// `(old, new)` field width when the screen width changed.
    pub resized: Option<(u16, u16)>,
    pub advanced: bool,
    pub spawned: Option<u16>,
    pub ray: Option<RayTrail>,
    pub kills: u32,
    pub regenerated: bool,
    pub collision: bool,
}

#[derive(Debug, Clone)]
struct Timers {
    advance: Timer,
    spawn: Timer,
    regen: Timer,
}

impl Timers {
    fn new(now: Duration) -> Self {
        Self {
            advance: Timer::new(now),
            spawn: Timer::new(now),
            regen: Timer::new(now),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    player: Player,
    field: MeteorField,
    timers: Timers,
    rng: StdRng,
    quit_requested: bool,
}

impl GameState {
    /// Create a game for a `rows` x `columns` screen, started at `now`.
    ///
    /// The rocket starts one row above the middle of the screen.
    pub fn new(seed: u64, rows: u16, columns: u16, now: Duration) -> Self {
        let position = Position::new(rows as i32 / 2 - 1, columns as i32 / 2);
        Self {
            player: Player::new(position),
            field: MeteorField::new(columns),
            timers: Timers::new(now),
            rng: StdRng::seed_from_u64(seed),
            quit_requested: false,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn field(&self) -> &MeteorField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut MeteorField {
        &mut self.field
    }

    pub fn status(&self) -> GameStatus {
        if !self.player.is_alive() {
            GameStatus::GameOver(EndReason::Destroyed)
        } else if self.quit_requested {
            GameStatus::GameOver(EndReason::Quit)
        } else {
            GameStatus::Running
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::Running
    }

    /// Run the simulation part of one frame.
    pub fn update(&mut self, now: Duration, playfield: Playfield) -> FrameReport {
        let mut report = FrameReport {
            resized: self.sync_width(playfield.columns),
            ..FrameReport::default()
        };
        self.field.truncate_rows(playfield.rows);

        let (advanced, spawned) = self.advance_field(now, playfield.rows);
        report.advanced = advanced;
        report.spawned = spawned;

        self.player.clamp_to(playfield.rows, playfield.columns);

        let (ray, kills) = self.resolve_shot(now);
        report.ray = ray;
        report.kills = kills;

        report.regenerated = self.regenerate(now);
        report.collision = self.resolve_collision();
        report
    }

    /// Resize the field to the screen width. Returns `(old, new)` on change.
    pub fn sync_width(&mut self, columns: u16) -> Option<(u16, u16)> {
        let old = self.field.width();
        if old == columns {
            return None;
        }
        self.field.resize(columns);
        Some((old, columns))
    }

    /// Advance and spawn meteors when their timers are due.
    ///
    /// The spawn timer resets whether or not the attempt placed a meteor.
    pub fn advance_field(&mut self, now: Duration, rows: u16) -> (bool, Option<u16>) {
        let advanced = self
            .timers
            .advance
            .poll(now, Duration::from_millis(METEOR_ADVANCE_MS));
        if advanced {
            self.field.advance(rows);
        }

        let mut spawned = None;
        if self
            .timers
            .spawn
            .poll(now, Duration::from_millis(METEOR_SPAWN_MS))
            && rows > 0
        {
            spawned = self.field.try_spawn(&mut self.rng);
        }
        (advanced, spawned)
    }

    /// Trace the active ray from the top of the screen down to the rocket.
    ///
    /// Every row above the rocket is part of the trail; a meteor found in the
    /// rocket's column on that trail is destroyed and scored. The ray ends once
    /// its lifetime has passed, after this frame's trace.
    pub fn resolve_shot(&mut self, now: Duration) -> (Option<RayTrail>, u32) {
        if !self.player.shot_active() {
            return (None, 0);
        }

        let pos = self.player.position();
        let column = pos.column.max(0) as u16;
        let end_row = pos.row.max(0) as u16;

        let mut kills = 0;
        for row in 0..end_row {
            if self.field.at(column) == Some(row) {
                self.field.clear(column);
                self.player.apply_kill();
                kills += 1;
            }
        }

        self.player.tick_shot(now);
        (Some(RayTrail { column, end_row }), kills)
    }

    /// Apply the periodic health/ray regeneration when due.
    pub fn regenerate(&mut self, now: Duration) -> bool {
        if self
            .timers
            .regen
            .poll(now, Duration::from_millis(REGEN_INTERVAL_MS))
        {
            self.player.apply_regeneration();
            true
        } else {
            false
        }
    }

    /// Damage the rocket if a meteor occupies its cell, removing that meteor.
    pub fn resolve_collision(&mut self) -> bool {
        let pos = self.player.position();
        if pos.row < 0 || pos.column < 0 {
            return false;
        }
        let column = pos.column as u16;
        if self.field.at(column) == Some(pos.row as u16) {
            self.player.apply_collision_damage();
            self.field.clear(column);
            true
        } else {
            false
        }
    }

    /// Apply one input event read at `now`.
    ///
    /// Quit is always honored. While a ray is active the rocket is locked and
    /// fire/move are ignored. Returns true when the event changed the state.
    pub fn dispatch(&mut self, event: InputEvent, now: Duration) -> bool {
        match event {
            InputEvent::Quit => {
                self.quit_requested = true;
                true
            }
            // The field follows the screen width on the next update.
            InputEvent::Resize => false,
            InputEvent::Action(_) if self.player.shot_active() => false,
            InputEvent::Action(GameAction::Fire) => self.player.fire_shot(now),
            InputEvent::Action(GameAction::Move(direction)) => {
                self.player.move_by(direction);
                true
            }
        }
    }
}
