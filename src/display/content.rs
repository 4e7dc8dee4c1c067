//! `ContentDisplay`: one wide flap cycling through identified content units.

use super::DisplayOptions;
use crate::buffer::Buffer;
use crate::error::ConfigError;
use crate::layout::Rect;
use crate::row::TileRow;
use crate::symbol::{ContentRef, SymbolSet};
use crate::tile::{FlapEvent, Frame};
use crate::widget::{draw_row, Widget};
use crossbeam_channel::Sender;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Identifier of a content entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryId {
    /// String id.
    Name(String),
    /// Numeric id.
    Number(i64),
}

impl From<&str> for EntryId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for EntryId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<i64> for EntryId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for EntryId {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<u32> for EntryId {
    fn from(n: u32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// An identified content unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    /// Lookup key.
    pub id: EntryId,
    /// What the flap shows.
    pub content: ContentRef,
}

impl ContentEntry {
    /// Pair an id with a content unit.
    pub fn new(id: impl Into<EntryId>, content: impl Into<ContentRef>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// A single tile selecting one entry by id.
///
/// The tile's alphabet is the entry list in order, so changing the id
/// turns the drum forward through every entry in between.
#[derive(Debug)]
pub struct ContentDisplay {
    entries: Vec<ContentEntry>,
    display_id: EntryId,
    index: usize,
    options: DisplayOptions,
    row: TileRow,
    bounds: Rect,
    dirty: bool,
}

impl ContentDisplay {
    /// Create a display showing `display_id`.
    pub fn new(
        entries: Vec<ContentEntry>,
        display_id: impl Into<EntryId>,
        options: DisplayOptions,
    ) -> Result<Self, ConfigError> {
        Self::new_at(entries, display_id, options, Instant::now())
    }

    /// Like [`Self::new`], with an explicit start time.
    pub fn new_at(
        entries: Vec<ContentEntry>,
        display_id: impl Into<EntryId>,
        options: DisplayOptions,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        let symbols = Self::alphabet(&entries)?;
        let display_id = display_id.into();
        let index = Self::lookup(&entries, &display_id);

        let mut row = TileRow::new(symbols, options.timing)?;
        row.set_index(index, now);

        Ok(Self {
            entries,
            display_id,
            index,
            options,
            row,
            bounds: Rect::ZERO,
            dirty: true,
        })
    }

    fn alphabet(entries: &[ContentEntry]) -> Result<Arc<SymbolSet>, ConfigError> {
        let set = SymbolSet::from_contents(entries.iter().map(|e| e.content.clone()))?;
        Ok(Arc::new(set))
    }

    /// Position of `id`; the first entry when absent. Duplicates resolve
    /// to the first match.
    fn lookup(entries: &[ContentEntry], id: &EntryId) -> usize {
        entries.iter().position(|e| &e.id == id).unwrap_or_else(|| {
            tracing::warn!(id = %id, entries = entries.len(), "unknown display id, showing first entry");
            0
        })
    }

    /// Select the entry to show.
    pub fn set_display_id(&mut self, display_id: impl Into<EntryId>, now: Instant) {
        let display_id = display_id.into();
        if display_id == self.display_id {
            return;
        }
        self.index = Self::lookup(&self.entries, &display_id);
        self.display_id = display_id;
        self.row.set_index(self.index, now);
        self.dirty = true;
    }

    /// Replace the entry list. The tile restarts from its fresh state.
    pub fn set_entries(&mut self, entries: Vec<ContentEntry>, now: Instant) -> Result<(), ConfigError> {
        let symbols = Self::alphabet(&entries)?;
        self.index = Self::lookup(&entries, &self.display_id);
        self.entries = entries;
        self.row.set_symbols(symbols);
        self.row.set_index(self.index, now);
        self.dirty = true;
        Ok(())
    }

    /// Replace timing and presentation.
    pub fn set_options(&mut self, options: DisplayOptions, now: Instant) -> Result<(), ConfigError> {
        options.validate()?;
        self.row.set_interval(options.timing, now)?;
        self.options = options;
        self.dirty = true;
        Ok(())
    }

    /// Advance the tile if due. Returns `true` if it moved.
    pub fn poll(&mut self, now: Instant) -> bool {
        let changed = !self.row.poll(now).is_empty();
        self.dirty |= changed;
        changed
    }

    /// Forward tile events to `observer`.
    pub fn observe(&mut self, observer: Sender<FlapEvent>) {
        self.row.observe(observer);
    }

    /// The entries, in drum order.
    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }

    /// Requested id.
    pub const fn display_id(&self) -> &EntryId {
        &self.display_id
    }

    /// Resolved entry index.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current configuration.
    pub const fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Text of the target entry, usable as an accessible label.
    pub fn label(&self) -> String {
        self.entries
            .get(self.index)
            .map(|e| e.content.content().text())
            .unwrap_or_default()
    }

    /// Current faces.
    pub fn frame(&self) -> Frame {
        self.row.frames().into_iter().next().unwrap_or_default()
    }

    /// Whether the tile has stopped.
    pub fn is_settled(&self) -> bool {
        self.row.is_settled()
    }

    /// Next pending flip.
    pub fn next_due(&self) -> Option<Instant> {
        self.row.next_due()
    }

    fn tile_width(&self) -> u16 {
        self.options.tile_width(self.row.max_width())
    }
}

impl Widget for ContentDisplay {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn preferred_size(&self) -> (u16, u16) {
        (self.tile_width(), self.options.size.rows())
    }

    fn render(&self, buffer: &mut Buffer) {
        let style = self.options.style();
        draw_row(buffer, self.bounds, &[self.frame()], self.tile_width(), 0, &style);
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
    use crate::symbol::{Content, Symbol};
    use crate::widget::Size;
    use std::time::Duration;

    const TICK: Duration = Duration::from_millis(50);

    fn weather() -> Vec<ContentEntry> {
        vec![
            ContentEntry::new("sun", Content::new("Sunny").with_icon("☀")),
            ContentEntry::new("rain", Content::new("Rainy").with_icon("☔")),
            ContentEntry::new("snow", Content::new("Snow").with_icon("❄")),
        ]
    }

    fn options() -> DisplayOptions {
        DisplayOptions::default().with_timing(TICK)
    }

    fn settle(display: &mut ContentDisplay, start: Instant) {
        let mut now = start;
        while !display.is_settled() {
            now += TICK;
            display.poll(now);
        }
    }

    fn shown(display: &ContentDisplay) -> Option<String> {
        display.frame().current.as_ref().map(Symbol::display_text)
    }

    #[test]
    fn test_empty_entries_rejected() {
        let err = ContentDisplay::new(Vec::new(), "a", options()).unwrap_err();
        assert_eq!(err, ConfigError::EmptySymbolSet);
    }

    #[test]
    fn test_shows_selected_entry() {
        let now = Instant::now();
        let mut display = ContentDisplay::new_at(weather(), "snow", options(), now).unwrap();
        assert_eq!(display.index(), 2);
        settle(&mut display, now);
        assert_eq!(shown(&display).as_deref(), Some("❄ Snow"));
        assert_eq!(display.label(), "❄ Snow");
    }

    #[test]
    fn test_wrap_to_first_entry_takes_one_step() {
        let now = Instant::now();
        let entries = vec![
            ContentEntry::new("a", Content::new("Alpha")),
            ContentEntry::new("b", Content::new("Bravo")),
        ];
        let mut display = ContentDisplay::new_at(entries, "b", options(), now).unwrap();
        settle(&mut display, now);
        assert_eq!(shown(&display).as_deref(), Some("Bravo"));

        display.set_display_id("a", now);
        let frame = display.frame();
        assert!(frame.is_final);
        assert_eq!(frame.current.as_ref().map(Symbol::display_text).as_deref(), Some("Alpha"));
        assert_eq!(frame.previous.as_ref().map(Symbol::display_text).as_deref(), Some("Bravo"));
    }

    #[test]
    fn test_identical_content_stays_distinct() {
        let now = Instant::now();
        let entries = vec![
            ContentEntry::new(1_i64, Content::new("Same")),
            ContentEntry::new(2_i64, Content::new("Same")),
        ];
        let mut display = ContentDisplay::new_at(entries, 2_i64, options(), now).unwrap();
        settle(&mut display, now);
        assert_eq!(display.row.tiles()[0].cursor().current, Some(1));
    }

    #[test]
    fn test_unknown_id_falls_back_to_first() {
        let now = Instant::now();
        let mut display = ContentDisplay::new_at(weather(), "hail", options(), now).unwrap();
        assert_eq!(display.index(), 0);
        assert!(display.is_settled());
        assert_eq!(shown(&display).as_deref(), Some("☀ Sunny"));

        display.set_display_id(EntryId::Number(7), now);
        assert_eq!(display.index(), 0);
    }

    #[test]
    fn test_set_entries_restarts_tile() {
        let now = Instant::now();
        let mut display = ContentDisplay::new_at(weather(), "rain", options(), now).unwrap();
        settle(&mut display, now);

        let mut reordered = weather();
        reordered.reverse();
        display.set_entries(reordered, now).unwrap();
        assert_eq!(display.index(), 1);
        assert_eq!(display.frame().previous, None);
        settle(&mut display, now);
        assert_eq!(shown(&display).as_deref(), Some("☔ Rainy"));

        assert_eq!(display.set_entries(Vec::new(), now), Err(ConfigError::EmptySymbolSet));
        assert_eq!(display.entries().len(), 3);
    }

    #[test]
    fn test_render_wide_tile() {
        let now = Instant::now();
        let opts = options().with_size(Size::Small).with_hinge(false);
        let mut display = ContentDisplay::new_at(weather(), "sun", opts, now).unwrap();
        let (width, height) = display.preferred_size();
        assert_eq!(height, 3);

        let mut buffer = Buffer::new(width, height);
        display.set_bounds(Rect::new(0, 0, width, height));
        display.render(&mut buffer);
        assert!(buffer.row_text(0).contains("Sunny"));
        assert!(buffer.row_text(2).contains("Sunny"));
    }
}
