//! Buffer: a grid of cells that widgets draw into.
//!
//! Cells are stored in row-major order in one contiguous `Vec`.

use super::cell::{Cell, Modifiers, Rgb};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A grid of cells representing (part of) the terminal screen.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

/// Colors and modifiers applied by [`Buffer::set_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// Create a style with no modifiers.
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Builder: modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Apply this style to a cell.
    pub const fn apply(self, cell: Cell) -> Cell {
        cell.with_fg(self.fg)
            .with_bg(self.bg)
            .with_modifiers(self.modifiers)
    }
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// All cells are initialized to empty (space with default colors).
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Buffer dimensions must be non-zero");
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get a cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell at (x, y). Returns `true` if in bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(i) = self.index_of(x, y) {
            self.cells[i] = cell;
            true
        } else {
            false
        }
    }

    /// Fill a rectangle with a cell, clipped to the buffer.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, cell: &Cell) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                self.set(col, row, cell.clone());
            }
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Resize the buffer, keeping the overlapping top-left content.
    pub fn resize(&mut self, width: u16, height: u16) {
        let mut next = Self::new(width, height);
        for y in 0..self.height.min(height) {
            for x in 0..self.width.min(width) {
                if let Some(cell) = self.get(x, y) {
                    next.set(x, y, cell.clone());
                }
            }
        }
        *self = next;
    }

    /// Draw `text` starting at (x, y), using at most `max_width` columns.
    ///
    /// Wide graphemes take two cells (the second is a continuation) and are
    /// skipped entirely if they would straddle the limit. Returns the number
    /// of columns written.
    pub fn set_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Style) -> u16 {
        let limit = x.saturating_add(max_width).min(self.width);
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let width = u16::try_from(grapheme.width()).unwrap_or(u16::MAX);
            if width == 0 {
                continue;
            }
            if col.saturating_add(width) > limit {
                break;
            }
            self.set(col, y, style.apply(Cell::from_grapheme(grapheme)));
            for extra in 1..width {
                self.set(col + extra, y, style.apply(Cell::continuation()));
            }
            col += width;
        }
        col - x
    }

    /// Text of row `y`, skipping continuation cells.
    pub fn row_text(&self, y: u16) -> String {
        self.rows()
            .nth(y as usize)
            .map(|row| {
                row.iter()
                    .filter(|c| !c.is_continuation())
                    .map(|c| c.symbol().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Buffer({}x{})", self.width, self.height)?;
        for y in 0..self.height {
            writeln!(f, "|{}|", self.row_text(y))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_new() {
        let buffer = Buffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.cells().len(), 80 * 24);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_buffer_zero_size() {
        let _ = Buffer::new(0, 1);
    }

    #[test]
    fn test_get_set() {
        let mut buffer = Buffer::new(10, 5);
        assert!(buffer.set(3, 2, Cell::new('X')));
        assert_eq!(buffer.get(3, 2).map(|c| c.symbol().into_owned()), Some("X".into()));
        assert!(!buffer.set(10, 0, Cell::new('Y')));
        assert!(buffer.get(0, 5).is_none());
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buffer = Buffer::new(4, 2);
        buffer.fill_rect(2, 1, 10, 10, &Cell::new('#'));
        assert_eq!(buffer.row_text(0), "    ");
        assert_eq!(buffer.row_text(1), "  ##");
    }

    #[test]
    fn test_set_str_wide() {
        let mut buffer = Buffer::new(6, 1);
        let style = Style::new(Rgb::WHITE, Rgb::BLACK);
        assert_eq!(buffer.set_str(0, 0, "新宿駅", 5, style), 4);
        assert_eq!(buffer.row_text(0), "新宿  ");
        assert!(buffer.get(1, 0).is_some_and(Cell::is_continuation));
    }

    #[test]
    fn test_set_str_style() {
        let mut buffer = Buffer::new(3, 1);
        let style = Style::new(Rgb::new(9, 9, 9), Rgb::new(1, 1, 1)).with_modifiers(Modifiers::BOLD);
        buffer.set_str(0, 0, "AB", 3, style);
        let cell = buffer.get(1, 0).unwrap();
        assert_eq!(cell.fg(), Rgb::new(9, 9, 9));
        assert_eq!(cell.modifiers(), Modifiers::BOLD);
    }

    #[test]
    fn test_resize_keeps_content() {
        let mut buffer = Buffer::new(3, 3);
        buffer.set(1, 1, Cell::new('o'));
        buffer.resize(2, 2);
        assert_eq!(buffer.row_text(1), " o");
        buffer.clear();
        assert_eq!(buffer.row_text(1), "  ");
    }
}
