//! Display facades: the two public ways to put a board on screen.
//!
//! - [`FixedDisplay`]: a value spelled out over a character alphabet, one
//!   tile per position (or one word tile when `length == 1`).
//! - [`ContentDisplay`]: a single tile over a list of identified content
//!   units, selected by id.
//!
//! Both validate their configuration up front and then never fail: odd
//! input while running is absorbed by padding, truncation, transient
//! alphabet entries or a fallback entry.

mod content;
mod fixed;

pub use content::{ContentDisplay, ContentEntry, EntryId};
pub use fixed::{FixedDisplay, FixedOptions, SymbolSource};

use crate::error::ConfigError;
use crate::widget::{FlapStyle, Size, Theme};
use std::time::Duration;

/// Default flip interval.
pub const DEFAULT_TIMING: Duration = Duration::from_millis(60);

/// Options shared by both displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Time between flips.
    pub timing: Duration,
    /// Draw the hinge line.
    pub hinge: bool,
    /// Tile size.
    pub size: Size,
    /// Color theme.
    pub theme: Theme,
    /// Fixed tile width in columns, overriding the measured glyph width.
    pub digit_width: Option<u16>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            timing: DEFAULT_TIMING,
            hinge: true,
            size: Size::Medium,
            theme: Theme::Default,
            digit_width: None,
        }
    }
}

impl DisplayOptions {
    /// Set the flip interval.
    #[must_use]
    pub const fn with_timing(mut self, timing: Duration) -> Self {
        self.timing = timing;
        self
    }

    /// Show or hide the hinge.
    #[must_use]
    pub const fn with_hinge(mut self, hinge: bool) -> Self {
        self.hinge = hinge;
        self
    }

    /// Set the tile size.
    #[must_use]
    pub const fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the theme.
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Force a tile width.
    #[must_use]
    pub const fn with_digit_width(mut self, width: u16) -> Self {
        self.digit_width = Some(width);
        self
    }

    /// Reject settings the animator cannot run with.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    /// Drawing style derived from these options.
    pub const fn style(&self) -> FlapStyle {
        FlapStyle::new(self.theme, self.size, self.hinge)
    }

    /// Tile width for glyphs up to `glyph_width` columns.
    pub fn tile_width(&self, glyph_width: usize) -> u16 {
        self.digit_width.unwrap_or_else(|| {
            self.size
                .tile_width(u16::try_from(glyph_width).unwrap_or(u16::MAX))
        })
    }
}
