//! Session: the frame loop tying state, view, surface and input together.
//!
//! One [`Session::step`] is one frame:
//!
//! 1. sample the clock and the surface size
//! 2. update the game state for the playable area
//! 3. render into the surface canvas and flush it
//! 4. poll at most one input event and dispatch it
//! 5. report the outcome once the game is over

use std::time::Duration;

use anyhow::Result;
use log::{debug, info, trace};

use crate::core::{Clock, EndReason, FrameReport, GameState, GameStatus};
use crate::input::InputSource;
use crate::term::{GameView, RenderSurface, Viewport};
use crate::types::InputEvent;

/// Final result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub reason: EndReason,
    pub score: u32,
    pub health: i32,
    pub frames: u64,
    pub elapsed: Duration,
}

pub struct Session<S, I, C> {
    surface: S,
    input: I,
    clock: C,
    view: GameView,
    state: GameState,
    last_viewport: Option<Viewport>,
    frames: u64,
}

impl<S, I, C> Session<S, I, C>
where
    S: RenderSurface,
    I: InputSource,
    C: Clock,
{
    /// Start a new game sized to the surface.
    pub fn new(surface: S, input: I, clock: C, view: GameView, seed: u64) -> Result<Self> {
        let viewport = surface.size()?;
        let state = GameState::new(seed, viewport.height, viewport.width, clock.now());
        info!(
            "session start: {}x{} terminal, statistics {}",
            viewport.width,
            viewport.height,
            if view.show_statistics() { "visible" } else { "hidden" }
        );
        Ok(Self::with_state(surface, input, clock, view, state))
    }

    /// Run an existing game state.
    pub fn with_state(surface: S, input: I, clock: C, view: GameView, state: GameState) -> Self {
        Self {
            surface,
            input,
            clock,
            view,
            state,
            last_viewport: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run frames until the game is over.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.step()? {
                info!(
                    "session over ({:?}) after {} frames: score {}, health {}",
                    outcome.reason, outcome.frames, outcome.score, outcome.health
                );
                return Ok(outcome);
            }
        }
    }

    /// Run a single frame. Returns the outcome once the game has ended.
    pub fn step(&mut self) -> Result<Option<Outcome>> {
        let now = self.clock.now();
        let viewport = self.surface.size()?;
        if self.last_viewport != Some(viewport) {
            if self.last_viewport.is_some() {
                info!("viewport resized to {}x{}", viewport.width, viewport.height);
            }
            self.last_viewport = Some(viewport);
        }

        let playfield = self.view.playfield(viewport);
        let report = self.state.update(now, playfield);
        self.log_report(&report);

        self.view
            .render_into(&self.state, &report, viewport, self.surface.canvas());
        self.surface.flush()?;
        self.frames += 1;

        if let Some(event) = self.input.poll_event()? {
            if event == InputEvent::Resize {
                self.surface.invalidate();
            }
            if self.state.dispatch(event, self.clock.now()) {
                trace!("input applied: {:?}", event);
            }
        }

        Ok(match self.state.status() {
            GameStatus::Running => None,
            GameStatus::GameOver(reason) => Some(self.outcome(reason)),
        })
    }

    fn outcome(&self, reason: EndReason) -> Outcome {
        let player = self.state.player();
        Outcome {
            reason,
            score: player.score(),
            health: player.health(),
            frames: self.frames,
            elapsed: self.clock.now(),
        }
    }

    fn log_report(&self, report: &FrameReport) {
        let player = self.state.player();
        if let Some((old, new)) = report.resized {
            debug!("meteor field resized from {} to {} columns", old, new);
        }
        if report.kills > 0 {
            debug!("ray destroyed {} meteor(s), score {}", report.kills, player.score());
        }
        if report.collision {
            debug!("meteor hit the rocket, health {}", player.health());
        }
        if report.regenerated {
            info!(
                "regeneration: health {}, rays {}",
                player.health(),
                player.rays()
            );
        }
    }
}
