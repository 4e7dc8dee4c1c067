//! Symbols: the units a flap can show.
//!
//! A [`Symbol`] is either plain text (a character, or a whole word in word
//! mode) or an opaque [`ContentRef`] such as an icon + label badge.
//!
//! # Equality
//!
//! Text compares by value. Content compares by *identity*: two badges with
//! the same icon and label are still different flaps unless they share the
//! same [`ContentRef`] handle. Text never equals content.

mod resolve;
mod set;

pub use resolve::{pad_value, resolve_row, PadMode, RowSpec, RowValue, SymbolSetMode, TileMode};
pub use set::{Preset, SymbolSet};

use std::fmt;
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

/// A non-character display payload: an optional icon followed by a label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    /// Leading icon (usually a single emoji or symbol).
    pub icon: Option<String>,
    /// Label text.
    pub label: String,
}

impl Content {
    /// Create a content unit with just a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            icon: None,
            label: label.into(),
        }
    }

    /// Attach a leading icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Text drawn for this unit: `"icon label"`, or just the label.
    pub fn text(&self) -> String {
        match &self.icon {
            Some(icon) if self.label.is_empty() => icon.clone(),
            Some(icon) => format!("{icon} {}", self.label),
            None => self.label.clone(),
        }
    }
}

/// Shared handle to a [`Content`] unit, compared by pointer identity.
#[derive(Clone)]
pub struct ContentRef(Arc<Content>);

impl ContentRef {
    /// Wrap a content unit in a new handle with its own identity.
    pub fn new(content: Content) -> Self {
        Self(Arc::new(content))
    }

    /// Borrow the content.
    pub fn content(&self) -> &Content {
        &self.0
    }

    /// Whether two handles point at the same unit.
    #[inline]
    pub fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ContentRef {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for ContentRef {}

impl fmt::Debug for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentRef({:p}, {:?})", Arc::as_ptr(&self.0), self.0.label)
    }
}

impl From<Content> for ContentRef {
    fn from(content: Content) -> Self {
        Self::new(content)
    }
}

/// One displayable unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// A character or word, compared by value.
    Text(String),
    /// An opaque content unit, compared by identity.
    Content(ContentRef),
}

impl Symbol {
    /// Shorthand for a text symbol.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Whether this is a content unit.
    pub const fn is_content(&self) -> bool {
        matches!(self, Self::Content(_))
    }

    /// Text as drawn on a flap face.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Content(c) => c.content().text(),
        }
    }

    /// Terminal column width of [`Self::display_text`].
    pub fn width(&self) -> usize {
        match self {
            Self::Text(s) => s.width(),
            Self::Content(c) => c.content().text().width(),
        }
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<ContentRef> for Symbol {
    fn from(c: ContentRef) -> Self {
        Self::Content(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Content(c) => f.write_str(&c.content().text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_compares_by_value() {
        assert_eq!(Symbol::text("A"), Symbol::from('A'));
        assert_ne!(Symbol::text("A"), Symbol::text("B"));
    }

    #[test]
    fn test_content_compares_by_identity() {
        let sunny = ContentRef::new(Content::new("Sunny").with_icon("☀"));
        let twin = ContentRef::new(Content::new("Sunny").with_icon("☀"));

        assert_eq!(Symbol::from(sunny.clone()), Symbol::from(sunny.clone()));
        assert_ne!(Symbol::from(sunny), Symbol::from(twin));
    }

    #[test]
    fn test_text_never_equals_content() {
        let badge = ContentRef::new(Content::new("A"));
        assert_ne!(Symbol::text("A"), Symbol::from(badge));
    }

    #[test]
    fn test_content_text_and_width() {
        let rainy = Content::new("Rainy").with_icon("☔");
        assert_eq!(rainy.text(), "☔ Rainy");
        assert_eq!(Symbol::from(ContentRef::new(rainy)).width(), 8);
        assert_eq!(Symbol::text("東京").width(), 4);
    }
}
