//! Render surfaces: a size, a canvas to draw the frame into, and a flush.

use anyhow::{Context, Result};

use crate::fb::FrameBuffer;
use crate::game_view::Viewport;
use crate::renderer::TerminalRenderer;

/// What the game loop needs from a display.
pub trait RenderSurface {
    /// Current size of the display.
    fn size(&self) -> Result<Viewport>;

    /// Buffer the next frame is drawn into.
    fn canvas(&mut self) -> &mut FrameBuffer;

    /// Push the canvas to the display.
    fn flush(&mut self) -> Result<()>;

    /// Forget what is on the display so the next flush redraws everything.
    fn invalidate(&mut self) {}
}

impl<T: RenderSurface + ?Sized> RenderSurface for &mut T {
    fn size(&self) -> Result<Viewport> {
        (**self).size()
    }

    fn canvas(&mut self) -> &mut FrameBuffer {
        (**self).canvas()
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn invalidate(&mut self) {
        (**self).invalidate();
    }
}

/// The real terminal, driven through [`TerminalRenderer`].
pub struct TerminalSurface {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl RenderSurface for TerminalSurface {
    fn size(&self) -> Result<Viewport> {
        let (w, h) = crossterm::terminal::size().context("failed to query terminal size")?;
        Ok(Viewport::new(w, h))
    }

    fn canvas(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    fn flush(&mut self) -> Result<()> {
        self.renderer.present(&mut self.fb)
    }

    fn invalidate(&mut self) {
        self.renderer.invalidate();
    }
}

/// Off-screen surface of a fixed (but changeable) size.
///
/// Keeps a copy of the last flushed frame so headless runs can inspect what
/// would have been shown.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    viewport: Viewport,
    fb: FrameBuffer,
    presented: FrameBuffer,
    flushes: u64,
    invalidations: u64,
}

impl MemorySurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            fb: FrameBuffer::new(width, height),
            presented: FrameBuffer::new(width, height),
            flushes: 0,
            invalidations: 0,
        }
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
    }

    /// The last flushed frame.
    pub fn presented(&self) -> &FrameBuffer {
        &self.presented
    }

    pub fn flushes(&self) -> u64 {
        self.flushes
    }

    pub fn invalidations(&self) -> u64 {
        self.invalidations
    }
}

impl RenderSurface for MemorySurface {
    fn size(&self) -> Result<Viewport> {
        Ok(self.viewport)
    }

    fn canvas(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    fn flush(&mut self) -> Result<()> {
        self.presented.clone_from(&self.fb);
        self.flushes += 1;
        Ok(())
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }
}
