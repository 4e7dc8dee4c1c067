//! Cell: one terminal column of a rendered board.
//!
//! Flap faces are mostly single characters, but word and content tiles
//! carry CJK text and emoji, so a cell holds either a `char` or a whole
//! grapheme cluster. Wide glyphs occupy two cells; the second one is a
//! continuation marker that the terminal layer skips.

use bitflags::bitflags;
use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Text style modifiers.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text (the lower face while a flap is turning)
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// What a cell shows.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
enum Glyph {
    /// A single-codepoint character.
    Char(char),
    /// A multi-codepoint grapheme cluster.
    Cluster(Box<str>),
    /// Right half of a wide glyph in the cell to the left.
    Continuation,
}

/// A single terminal cell.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    glyph: Glyph,
    fg: Rgb,
    bg: Rgb,
    modifiers: Modifiers,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// A blank cell with white-on-black colors.
    pub const EMPTY: Self = Self::new(' ');

    /// Create a cell for a character.
    pub const fn new(c: char) -> Self {
        Self::with_glyph(Glyph::Char(c))
    }

    const fn with_glyph(glyph: Glyph) -> Self {
        Self {
            glyph,
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a cell for a grapheme cluster.
    pub fn from_grapheme(grapheme: &str) -> Self {
        let mut chars = grapheme.chars();
        let glyph = match (chars.next(), chars.next()) {
            (None, _) => Glyph::Char(' '),
            (Some(c), None) => Glyph::Char(c),
            _ => Glyph::Cluster(grapheme.into()),
        };
        Self::with_glyph(glyph)
    }

    /// Placeholder for the second column of a wide glyph.
    pub const fn continuation() -> Self {
        Self::with_glyph(Glyph::Continuation)
    }

    /// Text of the cell (empty for a continuation).
    pub fn symbol(&self) -> Cow<'_, str> {
        match &self.glyph {
            Glyph::Char(c) => Cow::Owned(c.to_string()),
            Glyph::Cluster(s) => Cow::Borrowed(s),
            Glyph::Continuation => Cow::Borrowed(""),
        }
    }

    /// Whether this cell is the right half of a wide glyph.
    pub const fn is_continuation(&self) -> bool {
        matches!(self.glyph, Glyph::Continuation)
    }

    /// Columns this cell's glyph occupies (0 for continuations).
    pub fn display_width(&self) -> usize {
        match &self.glyph {
            Glyph::Char(c) => c.width().unwrap_or(0),
            Glyph::Cluster(s) => s.width(),
            Glyph::Continuation => 0,
        }
    }

    /// Foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Style modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Builder: foreground color.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Builder: background color.
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Builder: modifiers.
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("symbol", &self.symbol())
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from(0x00FF_5500), Rgb::new(0xFF, 0x55, 0x00));
    }

    #[test]
    fn test_char_cell() {
        let cell = Cell::new('A').with_fg(Rgb::new(1, 2, 3));
        assert_eq!(cell.symbol(), "A");
        assert_eq!(cell.display_width(), 1);
        assert_eq!(cell.fg(), Rgb::new(1, 2, 3));
        assert_eq!(cell.bg(), Rgb::BLACK);
    }

    #[test]
    fn test_grapheme_cells() {
        assert_eq!(Cell::from_grapheme("東").display_width(), 2);
        let thumbs = Cell::from_grapheme("👍🏽");
        assert_eq!(thumbs.symbol(), "👍🏽");
        assert_eq!(Cell::from_grapheme(""), Cell::new(' '));
    }

    #[test]
    fn test_continuation() {
        let cell = Cell::continuation();
        assert!(cell.is_continuation());
        assert_eq!(cell.symbol(), "");
        assert_eq!(cell.display_width(), 0);
    }
}
