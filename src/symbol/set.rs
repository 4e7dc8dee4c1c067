//! `SymbolSet`: the ordered alphabet a flap cycles through.

use super::{ContentRef, Symbol};
use crate::error::ConfigError;
use std::sync::{Arc, OnceLock};
use unicode_segmentation::UnicodeSegmentation;

/// A non-empty, ordered sequence of symbols.
///
/// Order defines the stepping direction and the wrap point. Sets are meant
/// to be shared as `Arc<SymbolSet>` between every tile of a display; tiles
/// never mutate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    symbols: Vec<Symbol>,
}

impl SymbolSet {
    /// Create a set from an explicit symbol list.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, ConfigError> {
        if symbols.is_empty() {
            return Err(ConfigError::EmptySymbolSet);
        }
        Ok(Self { symbols })
    }

    /// One symbol per grapheme cluster of `chars`.
    pub fn from_chars(chars: &str) -> Result<Self, ConfigError> {
        Self::new(chars.graphemes(true).map(Symbol::from).collect())
    }

    /// One symbol per word.
    pub fn from_words<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(words.into_iter().map(|w| Symbol::Text(w.into())).collect())
    }

    /// One symbol per content unit.
    pub fn from_contents<I>(contents: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = ContentRef>,
    {
        Self::new(contents.into_iter().map(Symbol::Content).collect())
    }

    /// Number of symbols (never zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    /// Index of the first symbol equal to `symbol`.
    pub fn position(&self, symbol: &Symbol) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }

    /// Iterate in cycle order.
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// The underlying slice.
    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Widest symbol in terminal columns.
    pub fn max_width(&self) -> usize {
        self.symbols.iter().map(Symbol::width).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

/// Named alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// Space followed by the digits `0`-`9`.
    #[default]
    Num,
    /// Space, `A`-`Z`, then `0`-`9`.
    Alphanum,
}

impl Preset {
    /// Characters of the preset, in cycle order.
    pub const fn chars(self) -> &'static str {
        match self {
            Self::Num => " 0123456789",
            Self::Alphanum => " ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
        }
    }

    /// Shared set for this preset.
    ///
    /// Every call returns the same `Arc`, so displays built from a preset
    /// share one allocation and keep a stable set identity.
    pub fn symbols(self) -> Arc<SymbolSet> {
        static NUM: OnceLock<Arc<SymbolSet>> = OnceLock::new();
        static ALPHANUM: OnceLock<Arc<SymbolSet>> = OnceLock::new();

        let cell = match self {
            Self::Num => &NUM,
            Self::Alphanum => &ALPHANUM,
        };
        Arc::clone(cell.get_or_init(|| {
            let symbols = self.chars().chars().map(Symbol::from).collect();
            Arc::new(SymbolSet { symbols })
        }))
    }
}
