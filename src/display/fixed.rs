//! `FixedDisplay`: a value spelled out over a fixed alphabet.

use super::DisplayOptions;
use crate::buffer::Buffer;
use crate::error::ConfigError;
use crate::layout::Rect;
use crate::row::TileRow;
use crate::symbol::{resolve_row, PadMode, Preset, RowSpec, RowValue, SymbolSet, SymbolSetMode, TileMode};
use crate::tile::{FlapEvent, Frame};
use crate::widget::{draw_row, Widget};
use crossbeam_channel::Sender;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Where a display's alphabet comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolSource {
    /// A named preset (shared process-wide).
    Preset(Preset),
    /// A caller-supplied set.
    Custom(Arc<SymbolSet>),
}

impl SymbolSource {
    /// The shared set.
    pub fn resolve(&self) -> Arc<SymbolSet> {
        match self {
            Self::Preset(preset) => preset.symbols(),
            Self::Custom(set) => Arc::clone(set),
        }
    }
}

impl Default for SymbolSource {
    fn default() -> Self {
        Self::Preset(Preset::Num)
    }
}

impl From<Preset> for SymbolSource {
    fn from(preset: Preset) -> Self {
        Self::Preset(preset)
    }
}

impl From<Arc<SymbolSet>> for SymbolSource {
    fn from(set: Arc<SymbolSet>) -> Self {
        Self::Custom(set)
    }
}

impl From<SymbolSet> for SymbolSource {
    fn from(set: SymbolSet) -> Self {
        Self::Custom(Arc::new(set))
    }
}

/// Configuration of a [`FixedDisplay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedOptions {
    /// Alphabet (default: [`Preset::Num`]).
    pub symbols: SymbolSource,
    /// Number of tiles. `1` shows the whole value on one word tile.
    pub length: usize,
    /// Padding symbol (default: space).
    pub pad_char: char,
    /// Padding side (default: [`PadMode::Auto`]).
    pub pad_mode: PadMode,
    /// Alphabet interpretation; inferred from the set when `None`.
    pub mode: Option<SymbolSetMode>,
    /// Timing and presentation.
    pub display: DisplayOptions,
}

impl FixedOptions {
    /// Defaults for a display of `length` tiles.
    pub fn new(length: usize) -> Self {
        Self {
            symbols: SymbolSource::default(),
            length,
            pad_char: ' ',
            pad_mode: PadMode::Auto,
            mode: None,
            display: DisplayOptions::default(),
        }
    }

    /// Set the alphabet.
    #[must_use]
    pub fn with_symbols(mut self, symbols: impl Into<SymbolSource>) -> Self {
        self.symbols = symbols.into();
        self
    }

    /// Set the padding symbol.
    #[must_use]
    pub const fn with_pad_char(mut self, pad_char: char) -> Self {
        self.pad_char = pad_char;
        self
    }

    /// Set the padding side.
    #[must_use]
    pub const fn with_pad_mode(mut self, pad_mode: PadMode) -> Self {
        self.pad_mode = pad_mode;
        self
    }

    /// Pin the alphabet interpretation instead of inferring it.
    #[must_use]
    pub const fn with_mode(mut self, mode: SymbolSetMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set timing and presentation.
    #[must_use]
    pub const fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    /// Shorthand for the flip interval.
    #[must_use]
    pub const fn with_timing(mut self, timing: Duration) -> Self {
        self.display.timing = timing;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        self.display.validate()
    }
}

/// A row of flaps spelling out a string value.
#[derive(Debug)]
pub struct FixedDisplay {
    value: String,
    options: FixedOptions,
    mode: SymbolSetMode,
    row_value: RowValue,
    row: TileRow,
    bounds: Rect,
    dirty: bool,
}

impl FixedDisplay {
    /// Create a display and start animating towards `value`.
    pub fn new(value: impl Into<String>, options: FixedOptions) -> Result<Self, ConfigError> {
        Self::new_at(value, options, Instant::now())
    }

    /// Like [`Self::new`], with an explicit start time.
    pub fn new_at(value: impl Into<String>, options: FixedOptions, now: Instant) -> Result<Self, ConfigError> {
        options.validate()?;
        let symbols = options.symbols.resolve();
        let mode = options.mode.unwrap_or_else(|| SymbolSetMode::classify(&symbols));
        let mut row = TileRow::new(symbols, options.display.timing)?;

        let value = value.into();
        let row_value = resolve_row(&value, row.symbols(), &Self::spec(&options, mode));
        row.set_value(&row_value, now);

        Ok(Self {
            value,
            options,
            mode,
            row_value,
            row,
            bounds: Rect::ZERO,
            dirty: true,
        })
    }

    const fn spec(options: &FixedOptions, mode: SymbolSetMode) -> RowSpec {
        RowSpec {
            length: options.length,
            pad_char: options.pad_char,
            pad_mode: options.pad_mode,
            mode,
        }
    }

    /// Show a new value. Tiles whose symbol is unchanged keep going.
    pub fn set_value(&mut self, value: impl Into<String>, now: Instant) {
        let value = value.into();
        if value == self.value {
            return;
        }
        self.value = value;
        self.retarget(now);
    }

    /// Replace the configuration.
    ///
    /// A different alphabet resets every tile; other changes only
    /// re-target or re-time them. Invalid options leave the display as is.
    pub fn set_options(&mut self, options: FixedOptions, now: Instant) -> Result<(), ConfigError> {
        options.validate()?;
        let symbols = options.symbols.resolve();
        self.row.set_interval(options.display.timing, now)?;
        self.mode = options.mode.unwrap_or_else(|| SymbolSetMode::classify(&symbols));
        self.row.set_symbols(symbols);
        self.options = options;
        self.retarget(now);
        Ok(())
    }

    fn retarget(&mut self, now: Instant) {
        let spec = Self::spec(&self.options, self.mode);
        self.row_value = resolve_row(&self.value, self.row.symbols(), &spec);
        self.row.set_value(&self.row_value, now);
        self.dirty = true;
    }

    /// Advance due tiles. Returns `true` if anything changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let changed = !self.row.poll(now).is_empty();
        self.dirty |= changed;
        changed
    }

    /// Forward tile events to `observer`.
    pub fn observe(&mut self, observer: Sender<FlapEvent>) {
        self.row.observe(observer);
    }

    /// The raw value, usable as an accessible label.
    pub fn label(&self) -> &str {
        &self.value
    }

    /// The padded, cased per-tile targets.
    pub const fn row_value(&self) -> &RowValue {
        &self.row_value
    }

    /// The tiles.
    pub const fn row(&self) -> &TileRow {
        &self.row
    }

    /// Current configuration.
    pub const fn options(&self) -> &FixedOptions {
        &self.options
    }

    /// Resolved alphabet interpretation.
    pub const fn mode(&self) -> SymbolSetMode {
        self.mode
    }

    /// Render tag of the tiles.
    pub const fn tile_mode(&self) -> TileMode {
        TileMode::for_row(self.mode, self.options.length)
    }

    /// Current faces, one per tile.
    pub fn frames(&self) -> Vec<Frame> {
        self.row.frames()
    }

    /// Whether every tile has stopped.
    pub fn is_settled(&self) -> bool {
        self.row.is_settled()
    }

    /// Earliest pending flip.
    pub fn next_due(&self) -> Option<Instant> {
        self.row.next_due()
    }

    fn tile_width(&self) -> u16 {
        self.options.display.tile_width(self.row.max_width())
    }

    fn gap(&self) -> u16 {
        u16::from(self.tile_mode() != TileMode::Words)
    }
}

impl Widget for FixedDisplay {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn preferred_size(&self) -> (u16, u16) {
        let count = u16::try_from(self.row.len()).unwrap_or(u16::MAX);
        let width = self
            .tile_width()
            .saturating_mul(count)
            .saturating_add(self.gap().saturating_mul(count.saturating_sub(1)));
        (width, self.options.display.size.rows())
    }

    fn render(&self, buffer: &mut Buffer) {
        let style = self.options.display.style();
        draw_row(buffer, self.bounds, &self.frames(), self.tile_width(), self.gap(), &style);
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;
    use crate::widget::Size;

    const TICK: Duration = Duration::from_millis(10);

    fn settle(display: &mut FixedDisplay, start: Instant) {
        let mut now = start;
        while !display.is_settled() {
            now += TICK;
            display.poll(now);
        }
    }

    fn faces(display: &FixedDisplay) -> String {
        display
            .frames()
            .iter()
            .map(|f| f.current.as_ref().map(Symbol::display_text).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = FixedDisplay::new("1", FixedOptions::new(0)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroLength);
    }

    #[test]
    fn test_zero_timing_rejected() {
        let options = FixedOptions::new(2).with_timing(Duration::ZERO);
        assert_eq!(FixedDisplay::new("1", options).unwrap_err(), ConfigError::ZeroInterval);
    }

    #[test]
    fn test_numeric_display_settles() {
        let now = Instant::now();
        let options = FixedOptions::new(4).with_timing(TICK);
        let mut display = FixedDisplay::new_at("42", options, now).unwrap();
        assert_eq!(display.mode(), SymbolSetMode::Numeric);
        assert_eq!(display.tile_mode(), TileMode::Numeric);
        assert_eq!(display.row_value().text(), "  42");

        settle(&mut display, now);
        assert_eq!(faces(&display), "  42");
        assert!(display.frames().iter().all(|f| f.is_final));
    }

    #[test]
    fn test_set_value_only_retargets_changes() {
        let now = Instant::now();
        let options = FixedOptions::new(3)
            .with_symbols(Preset::Alphanum)
            .with_timing(TICK);
        let mut display = FixedDisplay::new_at("abc", options, now).unwrap();
        settle(&mut display, now);
        assert_eq!(faces(&display), "ABC");

        display.set_value("abz", now);
        assert!(!display.row().tiles()[0].is_animating());
        assert!(!display.row().tiles()[1].is_animating());
        assert!(display.row().tiles()[2].is_animating());
        settle(&mut display, now);
        assert_eq!(faces(&display), "ABZ");
    }

    #[test]
    fn test_set_options_new_alphabet_resets() {
        let now = Instant::now();
        let mut display = FixedDisplay::new_at("7", FixedOptions::new(2).with_timing(TICK), now).unwrap();
        settle(&mut display, now);

        let options = FixedOptions::new(2)
            .with_symbols(Preset::Alphanum)
            .with_timing(TICK);
        display.set_options(options, now).unwrap();
        assert_eq!(display.mode(), SymbolSetMode::Alphanumeric);
        // Both tiles restarted from the fresh state: first step shows index 0.
        assert!(display.frames().iter().all(|f| f.previous.is_none()));
        settle(&mut display, now);
        assert_eq!(faces(&display), " 7");
    }

    #[test]
    fn test_set_options_rejects_invalid() {
        let now = Instant::now();
        let mut display = FixedDisplay::new_at("7", FixedOptions::new(2), now).unwrap();
        assert_eq!(
            display.set_options(FixedOptions::new(0), now),
            Err(ConfigError::ZeroLength)
        );
        assert_eq!(display.options().length, 2);
    }

    #[test]
    fn test_word_mode() {
        let now = Instant::now();
        let words = SymbolSet::from_words(["TOKYO", "PARIS", "LONDON"]).unwrap();
        let options = FixedOptions::new(1).with_symbols(words).with_timing(TICK);
        let mut display = FixedDisplay::new_at("paris", options, now).unwrap();

        assert_eq!(display.tile_mode(), TileMode::Words);
        assert_eq!(display.row().len(), 1);
        assert_eq!(display.row().tiles()[0].cursor().target, 1);
        settle(&mut display, now);
        assert_eq!(faces(&display), "PARIS");
        assert_eq!(display.label(), "paris");
    }

    #[test]
    fn test_render_and_size() {
        let now = Instant::now();
        let options = FixedOptions::new(2).with_timing(TICK);
        let mut display = FixedDisplay::new_at("12", options, now).unwrap();
        settle(&mut display, now);

        let (width, height) = display.preferred_size();
        assert_eq!((width, height), (7, Size::Medium.rows()));

        let mut buffer = Buffer::new(width, height);
        display.set_bounds(Rect::new(0, 0, width, height));
        display.render(&mut buffer);
        display.clear_redraw();
        assert_eq!(buffer.row_text(1), " 1   2 ");
        assert_eq!(buffer.row_text(3), " 1   2 ");
        assert!(!display.needs_redraw());

        display.set_value("13", now);
        assert!(display.needs_redraw());
    }
}
