//! Screen: flushes rendered buffers to a terminal through crossterm.
//!
//! The screen keeps the last presented buffer and only emits the cells
//! that differ from it, tracking cursor, colors and attributes so
//! redundant escape sequences are skipped. Everything is queued and
//! flushed once per frame.

use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crossterm::{
    cursor::{self, MoveTo},
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};

/// What the terminal is currently set to.
#[derive(Debug, Clone, Copy, Default)]
struct PenState {
    cursor: Option<(u16, u16)>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    modifiers: Option<Modifiers>,
}

/// A diffing writer over any `Write` sink.
#[derive(Debug)]
pub struct Screen<W: Write> {
    out: W,
    front: Option<Buffer>,
    restore: bool,
}

impl<W: Write> Screen<W> {
    /// Wrap a sink without touching terminal modes.
    pub const fn new(out: W) -> Self {
        Self {
            out,
            front: None,
            restore: false,
        }
    }

    /// Forget the last frame so the next one is drawn in full.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// The sink.
    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// Draw `next`, emitting only changed cells. Returns how many cells
    /// were written.
    ///
    /// A size change against the previous frame clears the screen and
    /// redraws everything.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn present(&mut self, next: &Buffer) -> io::Result<usize> {
        let front = self
            .front
            .take()
            .filter(|f| f.width() == next.width() && f.height() == next.height());
        if front.is_none() {
            queue!(self.out, SetAttribute(Attribute::Reset), Clear(ClearType::All))?;
        }

        let mut pen = PenState::default();
        let mut written = 0;
        for (y, row) in next.rows().enumerate() {
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            for (x, cell) in row.iter().enumerate() {
                let x = u16::try_from(x).unwrap_or(u16::MAX);
                if cell.is_continuation() {
                    continue;
                }
                if front.as_ref().and_then(|f| f.get(x, y)) == Some(cell) {
                    continue;
                }
                self.draw_cell(&mut pen, x, y, cell)?;
                written += 1;
            }
        }

        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        tracing::trace!(cells = written, "frame presented");

        self.front = Some(next.clone());
        Ok(written)
    }

    fn draw_cell(&mut self, pen: &mut PenState, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if pen.cursor != Some((x, y)) {
            queue!(self.out, MoveTo(x, y))?;
        }
        if pen.modifiers != Some(cell.modifiers()) {
            // Reset drops colors too, so they are re-sent below.
            queue!(self.out, SetAttribute(Attribute::Reset))?;
            for (flag, attribute) in [
                (Modifiers::BOLD, Attribute::Bold),
                (Modifiers::DIM, Attribute::Dim),
                (Modifiers::ITALIC, Attribute::Italic),
                (Modifiers::UNDERLINE, Attribute::Underlined),
                (Modifiers::REVERSED, Attribute::Reverse),
            ] {
                if cell.modifiers().contains(flag) {
                    queue!(self.out, SetAttribute(attribute))?;
                }
            }
            pen.modifiers = Some(cell.modifiers());
            pen.fg = None;
            pen.bg = None;
        }
        if pen.fg != Some(cell.fg()) {
            queue!(self.out, SetForegroundColor(to_color(cell.fg())))?;
            pen.fg = Some(cell.fg());
        }
        if pen.bg != Some(cell.bg()) {
            queue!(self.out, SetBackgroundColor(to_color(cell.bg())))?;
            pen.bg = Some(cell.bg());
        }
        queue!(self.out, Print(cell.symbol()))?;

        let width = u16::try_from(cell.display_width().max(1)).unwrap_or(1);
        pen.cursor = Some((x.saturating_add(width), y));
        Ok(())
    }
}

const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Screen<Stdout> {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    /// All three are undone when the screen is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched.
    pub fn stdout() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = crossterm::execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self {
            out,
            front: None,
            restore: true,
        })
    }

    /// Terminal size as (columns, rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be queried.
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        if !self.restore {
            return;
        }
        let _ = crossterm::execute!(
            self.out,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
