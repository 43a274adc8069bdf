//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs are
//! written. A size change or an explicit [`TerminalRenderer::invalidate`]
//! forces a full redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, Color, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode (no line buffering, no echo), alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Drop the remembered frame so the next one is redrawn in full.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Write `fb` to the terminal and keep it as the base for the next diff.
    ///
    /// `fb` comes back holding the previous frame; callers clear and redraw it
    /// every frame, so no copy is made.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut shown = match self.last.take() {
            Some(last) if last.width() == fb.width() && last.height() == fb.height() => {
                encode_diff_into(&last, fb, &mut self.buf)?;
                last
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut shown, fb);
        self.last = Some(shown);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`: clear the screen, then write every
/// row as one span.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut writer = SpanWriter::new(out);
    for y in 0..fb.height() {
        writer.span(fb, Span { x: 0, y, len: fb.width() })?;
    }
    writer.finish()
}

/// Encode only the spans of `next` that differ from `prev`.
///
/// Buffers of different sizes are encoded as full rows, without the clear.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut writer = SpanWriter::new(out);
    for span in changed_spans(prev, next) {
        writer.span(next, span)?;
    }
    writer.finish()
}

/// A horizontal run of cells on row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    x: u16,
    y: u16,
    len: u16,
}

/// Writes spans of a framebuffer, emitting SGR sequences only when the cell
/// style changes.
struct SpanWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> SpanWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn span(&mut self, fb: &FrameBuffer, span: Span) -> Result<()> {
        self.out.queue(cursor::MoveTo(span.x, span.y))?;
        for x in span.x..span.x + span.len {
            let cell = fb.get(x, span.y).unwrap_or_default();
            if self.style != Some(cell.style) {
                self.set_style(cell.style)?;
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        // SGR reset clears colors too, so it goes first.
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(SetForegroundColor(to_term_color(style.fg)))?;
        self.out.queue(SetBackgroundColor(to_term_color(style.bg)))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        self.style = Some(style);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn to_term_color(color: Color) -> style::Color {
    match color {
        Color::Reset => style::Color::Reset,
        Color::Red => style::Color::DarkRed,
        Color::Yellow => style::Color::DarkYellow,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
    }
}

/// Maximal runs of cells that differ between `prev` and `next`, row by row.
fn changed_spans<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> impl Iterator<Item = Span> + 'a {
    let same_size = prev.width() == next.width() && prev.height() == next.height();
    let width = next.width();

    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| !same_size || prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < width && !differs(x) {
                x += 1;
            }
            if x >= width {
                return None;
            }
            let start = x;
            while x < width && differs(x) {
                x += 1;
            }
            Some(Span { x: start, y, len: x - start })
        })
    })
}
