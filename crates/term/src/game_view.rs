//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use arrayvec::ArrayString;

use crate::core::{FrameReport, GameState, Playfield};
use crate::fb::FrameBuffer;
use crate::theme::Theme;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the game with one glyph set, with or without the status line.
#[derive(Debug, Clone)]
pub struct GameView {
    theme: Theme,
    show_statistics: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(Theme::ascii(), true)
    }
}

impl GameView {
    pub fn new(theme: Theme, show_statistics: bool) -> Self {
        Self {
            theme,
            show_statistics,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn show_statistics(&self) -> bool {
        self.show_statistics
    }

    /// Area left for gameplay once the status row (if shown) is taken out.
    pub fn playfield(&self, viewport: Viewport) -> Playfield {
        Playfield::from_screen(viewport.height, viewport.width, self.show_statistics)
    }

    /// Render the current frame into an existing framebuffer.
    ///
    /// `report` is the result of the `update` call for this frame; it carries
    /// the ray trail, which only exists for the frame it was traced in.
    pub fn render_into(
        &self,
        state: &GameState,
        report: &FrameReport,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let playfield = self.playfield(viewport);

        if self.show_statistics && viewport.height > 0 {
            self.draw_status_line(fb, state, viewport);
        }

        for (column, row) in state.field().iter() {
            if row < playfield.rows {
                fb.put_str(column, row, self.theme.meteor, self.theme.meteor_style);
            }
        }

        let pos = state.player().position();
        if pos.row >= 0 && pos.column >= 0 && (pos.row as u16) < playfield.rows {
            fb.put_str(
                pos.column as u16,
                pos.row as u16,
                self.theme.player,
                self.theme.player_style,
            );
        }

        if let Some(ray) = report.ray {
            for row in 0..ray.end_row.min(playfield.rows) {
                fb.put_str(ray.column, row, self.theme.ray, self.theme.ray_style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, report: &FrameReport, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, report, viewport, &mut fb);
        fb
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        let player = state.player();
        let mut line = ArrayString::<160>::new();
        if self
            .theme
            .write_status(&mut line, player.health(), player.rays(), player.score())
            .is_err()
        {
            return;
        }

        let text_w = line.chars().count() as i32;
        let x = viewport.width as i32 / 2 - text_w / 2 + self.theme.status_offset as i32;
        let y = viewport.height - 1;
        fb.put_str(x.max(0) as u16, y, &line, self.theme.status_style);
    }
}
