//! Flap rendering: draws one tile frame as two faces around a hinge.
//!
//! ```text
//!  ┌─────┐
//!  │     │  upper face
//!  │  B  │  <- incoming symbol
//!  │─────│  hinge
//!  │  A  │  <- outgoing symbol (dim) until the flap settles on B
//!  │     │  lower face
//!  └─────┘
//! ```

use super::palette::{Palette, Size, Theme};
use crate::buffer::{Buffer, Cell, Modifiers, Style};
use crate::layout::{tile_rects, Rect};
use crate::symbol::Symbol;
use crate::tile::Frame;
use unicode_width::UnicodeWidthStr;

/// Everything needed to draw tiles, besides the frames themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlapStyle {
    /// Colors.
    pub palette: Palette,
    /// Geometry.
    pub size: Size,
    /// Draw the hinge line.
    pub hinge: bool,
}

impl FlapStyle {
    /// Style for a theme and size.
    pub const fn new(theme: Theme, size: Size, hinge: bool) -> Self {
        Self {
            palette: theme.palette(),
            size,
            hinge,
        }
    }
}

/// Draw a single tile into `area` of `buffer`.
pub fn draw_tile(buffer: &mut Buffer, area: Rect, frame: &Frame, style: &FlapStyle) {
    if area.is_empty() {
        return;
    }
    let palette = &style.palette;
    let face = Cell::new(' ').with_bg(palette.face_bg);
    buffer.fill_rect(area.x, area.y, area.width, area.height, &face);

    let hinge_row = area.y + (area.height - 1) / 2;
    let glyph = Style::new(palette.face_fg, palette.face_bg).with_modifiers(Modifiers::BOLD);

    if hinge_row > area.y {
        draw_centered(buffer, area, hinge_row - 1, frame.upper(), glyph);
    } else {
        // A one-row tile only has room for the incoming symbol.
        draw_centered(buffer, area, hinge_row, frame.upper(), glyph);
        return;
    }

    if style.hinge {
        let line = Cell::new('─').with_fg(palette.hinge).with_bg(palette.face_bg);
        buffer.fill_rect(area.x, hinge_row, area.width, 1, &line);
    }

    if hinge_row + 1 < area.bottom() {
        let lower = if frame.is_final {
            glyph
        } else {
            glyph.with_modifiers(Modifiers::DIM)
        };
        draw_centered(buffer, area, hinge_row + 1, frame.lower(), lower);
    }
}

fn draw_centered(buffer: &mut Buffer, area: Rect, y: u16, symbol: Option<&Symbol>, style: Style) {
    let Some(symbol) = symbol else {
        return;
    };
    let text = symbol.display_text();
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let offset = area.width.saturating_sub(width) / 2;
    buffer.set_str(area.x + offset, y, &text, area.width - offset, style);
}

/// Draw a row of frames left to right inside `bounds`.
///
/// The board background fills `bounds` first, so gaps between tiles take
/// the board color.
pub fn draw_row(buffer: &mut Buffer, bounds: Rect, frames: &[Frame], tile_width: u16, gap: u16, style: &FlapStyle) {
    let bounds = bounds.intersection(&Rect::new(0, 0, buffer.width(), buffer.height()));
    if bounds.is_empty() {
        return;
    }
    let board = Cell::new(' ').with_bg(style.palette.board_bg);
    buffer.fill_rect(bounds.x, bounds.y, bounds.width, bounds.height, &board);

    let height = bounds.height.min(style.size.rows());
    let area = Rect::new(bounds.x, bounds.y, bounds.width, height);
    for (rect, frame) in tile_rects(area, frames.len(), tile_width, gap).into_iter().zip(frames) {
        draw_tile(buffer, rect, frame, style);
    }
}
