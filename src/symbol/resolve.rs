//! Resolver: turns a raw value into one target symbol per tile.
//!
//! Lengths are counted in grapheme clusters, so `"東京"` is two tiles and a
//! flag emoji is one.

use super::{Symbol, SymbolSet};
use unicode_segmentation::UnicodeSegmentation;

/// How the configured alphabet is interpreted.
///
/// Inferred once per symbol set by [`SymbolSetMode::classify`], or set
/// explicitly by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolSetMode {
    /// Only single digits or whitespace.
    Numeric,
    /// Any other all-text alphabet.
    Alphanumeric,
    /// The alphabet contains content units.
    Custom,
}

impl SymbolSetMode {
    /// Classify a symbol set by its contents.
    pub fn classify(set: &SymbolSet) -> Self {
        if set.iter().any(Symbol::is_content) {
            return Self::Custom;
        }
        let numeric = set.iter().all(|s| match s {
            Symbol::Text(t) => {
                let mut chars = t.chars();
                matches!(
                    (chars.next(), chars.next()),
                    (Some(c), None) if c.is_ascii_digit() || c.is_whitespace()
                )
            }
            Symbol::Content(_) => false,
        });
        if numeric {
            Self::Numeric
        } else {
            Self::Alphanumeric
        }
    }

    /// Whether values are upper-cased before display.
    pub const fn uppercases(self) -> bool {
        !matches!(self, Self::Custom)
    }
}

/// Per-tile render tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileMode {
    /// Digit tile.
    Numeric,
    /// Letter tile.
    Alphanumeric,
    /// Tile over a content alphabet.
    Custom,
    /// A single tile showing the whole value (word list or content units).
    Words,
}

impl TileMode {
    /// Tag for the tiles of a row of `length` positions.
    pub const fn for_row(mode: SymbolSetMode, length: usize) -> Self {
        if length == 1 {
            return Self::Words;
        }
        match mode {
            SymbolSetMode::Numeric => Self::Numeric,
            SymbolSetMode::Alphanumeric => Self::Alphanumeric,
            SymbolSetMode::Custom => Self::Custom,
        }
    }
}

/// Which side short values are padded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PadMode {
    /// Right-align numeric-looking values, left-align everything else.
    #[default]
    Auto,
    /// Pad on the left.
    Start,
    /// Pad on the right.
    End,
}

impl PadMode {
    /// Whether `value` gets its padding in front.
    pub fn pads_start(self, value: &str) -> bool {
        match self {
            Self::Auto => looks_numeric(value),
            Self::Start => true,
            Self::End => false,
        }
    }
}

/// Digits and `. , + -` only (the empty string qualifies).
fn looks_numeric(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '+' | '-'))
}

/// Pad or truncate `value` to exactly `length` grapheme clusters.
///
/// Longer values keep their first `length` symbols whatever the pad mode.
pub fn pad_value(value: &str, length: usize, pad_char: char, mode: PadMode) -> String {
    let count = value.graphemes(true).count();
    if count > length {
        return value.graphemes(true).take(length).collect();
    }
    if count == length {
        return value.to_string();
    }

    let padding: String = std::iter::repeat_n(pad_char, length - count).collect();
    if mode.pads_start(value) {
        padding + value
    } else {
        let mut padded = value.to_string();
        padded.push_str(&padding);
        padded
    }
}

/// Row shape used by [`resolve_row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpec {
    /// Number of tiles. `1` selects word mode.
    pub length: usize,
    /// Padding symbol.
    pub pad_char: char,
    /// Padding side.
    pub pad_mode: PadMode,
    /// Alphabet interpretation (drives casing).
    pub mode: SymbolSetMode,
}

/// Per-position targets for a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowValue {
    /// One target per tile.
    Tiles(Vec<Symbol>),
    /// Word mode: the whole value as a single target.
    Word(Symbol),
}

impl RowValue {
    /// Number of tiles this value drives.
    pub fn len(&self) -> usize {
        match self {
            Self::Tiles(tiles) => tiles.len(),
            Self::Word(_) => 1,
        }
    }

    /// `true` only for a zero-length tile row.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Targets in position order.
    pub fn symbols(&self) -> &[Symbol] {
        match self {
            Self::Tiles(tiles) => tiles,
            Self::Word(word) => std::slice::from_ref(word),
        }
    }

    /// The targets joined back into a string.
    pub fn text(&self) -> String {
        self.symbols().iter().map(Symbol::display_text).collect()
    }
}

/// Case, pad and split `value` into tile targets.
///
/// Targets are plain text; when the set holds a matching symbol the tile
/// will land on it, otherwise the tile appends the target to its private
/// copy of the alphabet.
pub fn resolve_row(value: &str, set: &SymbolSet, spec: &RowSpec) -> RowValue {
    // Casing applies to the padded row, pad symbols included.
    let case = |text: String| {
        if spec.mode.uppercases() {
            text.to_uppercase()
        } else {
            text
        }
    };

    if spec.length == 1 {
        return RowValue::Word(matching_symbol(set, case(value.to_string())));
    }

    let padded = case(pad_value(value, spec.length, spec.pad_char, spec.pad_mode));
    let mut tiles: Vec<Symbol> = padded
        .graphemes(true)
        .map(|g| matching_symbol(set, g.to_string()))
        .collect();
    tiles.resize(spec.length, matching_symbol(set, case(spec.pad_char.to_string())));
    RowValue::Tiles(tiles)
}

/// The set's own symbol when one matches, so content handles keep identity.
fn matching_symbol(set: &SymbolSet, text: String) -> Symbol {
    let symbol = Symbol::Text(text);
    set.position(&symbol)
        .and_then(|i| set.get(i))
        .cloned()
        .unwrap_or(symbol)
}
