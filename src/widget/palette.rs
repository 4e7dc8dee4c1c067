//! Presentation settings: themes, sizes and the geometry they imply.
//!
//! None of this affects animation; it only decides how a frame is drawn.

use crate::buffer::Rgb;

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Charcoal flaps with off-white glyphs.
    #[default]
    Default,
    /// Pale flaps with dark glyphs.
    Light,
    /// Black flaps with amber glyphs.
    Dark,
}

/// Colors used to draw tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Flap face background.
    pub face_bg: Rgb,
    /// Glyph color.
    pub face_fg: Rgb,
    /// Hinge line color.
    pub hinge: Rgb,
    /// Board background (gaps between tiles).
    pub board_bg: Rgb,
}

impl Theme {
    /// Colors for this theme.
    pub const fn palette(self) -> Palette {
        match self {
            Self::Default => Palette {
                face_bg: Rgb::from_u32(0x0022_2222),
                face_fg: Rgb::from_u32(0x00F5_F5F5),
                hinge: Rgb::from_u32(0x0008_0808),
                board_bg: Rgb::from_u32(0x0011_1111),
            },
            Self::Light => Palette {
                face_bg: Rgb::from_u32(0x00EE_EEEE),
                face_fg: Rgb::from_u32(0x0022_2222),
                hinge: Rgb::from_u32(0x00AA_AAAA),
                board_bg: Rgb::WHITE,
            },
            Self::Dark => Palette {
                face_bg: Rgb::from_u32(0x0014_1414),
                face_fg: Rgb::from_u32(0x00FF_C83D),
                hinge: Rgb::BLACK,
                board_bg: Rgb::BLACK,
            },
        }
    }
}

/// Tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    /// Three rows, no side padding.
    Small,
    /// Five rows.
    #[default]
    Medium,
    /// Seven rows.
    Large,
    /// Nine rows, wide padding.
    XLarge,
}

impl Size {
    /// Rows per tile: two equal faces around the hinge row.
    pub const fn rows(self) -> u16 {
        match self {
            Self::Small => 3,
            Self::Medium => 5,
            Self::Large => 7,
            Self::XLarge => 9,
        }
    }

    /// Blank columns on each side of the glyph.
    pub const fn padding(self) -> u16 {
        match self {
            Self::Small => 0,
            Self::Medium | Self::Large => 1,
            Self::XLarge => 2,
        }
    }

    /// Tile width for glyphs up to `glyph_width` columns wide.
    pub const fn tile_width(self, glyph_width: u16) -> u16 {
        let glyph = if glyph_width == 0 { 1 } else { glyph_width };
        glyph.saturating_add(self.padding() * 2)
    }
}
