//! # Flapboard
//!
//! Split-flap (Solari board) displays for terminal UIs.
//!
//! Every tile owns a drum of symbols and turns it forward, one flap per
//! interval, until it shows the requested symbol. Tiles run independently,
//! so a row of them settles with the familiar ripple.
//!
//! ## Core Concepts
//!
//! - **Symbol sets**: shared, immutable alphabets (`NUM`, `ALPHANUM`, words,
//!   or content units such as icon + label badges)
//! - **Forward-only stepping**: a tile never runs backwards; going from `B`
//!   to `A` wraps all the way around
//! - **Host-driven timers**: animators expose `poll(now)` and a deadline;
//!   a [`Ticker`] thread is available for hosts without an event loop
//! - **Diffed output**: displays render into a [`Buffer`] and the
//!   [`Screen`] flushes only the cells that changed
//!
//! ## Example
//!
//! ```rust,ignore
//! use flapboard::{Buffer, FixedDisplay, FixedOptions, Preset, Widget};
//! use std::time::Instant;
//!
//! let options = FixedOptions::new(6).with_symbols(Preset::Alphanum);
//! let mut board = FixedDisplay::new("Gate 4", options)?;
//!
//! let (width, height) = board.preferred_size();
//! let mut buffer = Buffer::new(width, height);
//! while !board.is_settled() {
//!     board.poll(Instant::now());
//!     board.render(&mut buffer);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod clock;
pub mod display;
pub mod error;
pub mod layout;
pub mod row;
pub mod symbol;
pub mod terminal;
pub mod tile;
pub mod widget;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, Modifiers, Rgb, Style};
pub use clock::{Tick, Ticker};
pub use display::{ContentDisplay, ContentEntry, DisplayOptions, EntryId, FixedDisplay, FixedOptions, SymbolSource};
pub use error::ConfigError;
pub use layout::Rect;
pub use row::TileRow;
pub use symbol::{
    pad_value, resolve_row, Content, ContentRef, PadMode, Preset, RowSpec, RowValue, Symbol, SymbolSet,
    SymbolSetMode, TileMode,
};
pub use terminal::Screen;
pub use tile::{FlapEvent, Frame, TileAnimator, TileCursor};
pub use widget::{FlapStyle, Size, Theme, Widget};
