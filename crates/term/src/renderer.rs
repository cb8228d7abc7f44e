//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`invalidate`]) is a full
//! redraw; later frames only rewrite the runs of cells that changed.
//!
//! [`invalidate`]: TerminalRenderer::invalidate

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows, when known.
    shown: Option<FrameBuffer>,
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
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor and mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(event::EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo everything [`enter`](Self::enter) did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(event::DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (terminal resized or clobbered).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Draw `fb`, sending only what differs from the previous frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.shown.as_mut() {
            Some(shown) if shown.width() == fb.width() && shown.height() == fb.height() => {
                encode_diff_into(shown, fb, &mut self.buf)?;
                shown.clone_from(fb);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.shown = Some(fb.clone());
            }
        }
        if self.buf.is_empty() {
            return Ok(());
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .context("write frame to terminal")?;
        self.stdout.flush().context("flush terminal")?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        write_cells(fb, 0, y, fb.width(), &mut pen, out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed cells of `next` relative to `prev` into `out`.
///
/// Nothing is written when the frames are identical. Frames of different
/// sizes fall back to a full redraw.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut pen = None;
    let mut wrote = false;
    for y in 0..next.height() {
        for (x, len) in changed_runs(prev, next, y) {
            out.queue(cursor::MoveTo(x, y))?;
            write_cells(next, x, y, len, &mut pen, out)?;
            wrote = true;
        }
    }
    if wrote {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn write_cells(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    pen: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let cell = fb.get(x + dx, y).unwrap_or_default();
        if *pen != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            *pen = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Maximal runs `(x, len)` of row `y` where the two frames differ.
///
/// Both frames must have the same size.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    y: u16,
) -> impl Iterator<Item = (u16, u16)> + 'a {
    let w = next.width();
    let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
    let mut x = 0u16;
    std::iter::from_fn(move || {
        while x < w && !differs(x) {
            x += 1;
        }
        if x >= w {
            return None;
        }
        let start = x;
        while x < w && differs(x) {
            x += 1;
        }
        Some((start, x - start))
    })
}
