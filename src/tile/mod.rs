//! Tile animation: the split-flap sequencing engine.
//!
//! Each tile owns a [`TileCursor`] and steps it forward through its
//! alphabet on a fixed interval until it shows the requested symbol.
//!
//! ```text
//!  request("C")      poll       poll       poll
//!  ──────────▶ [ ] ──────▶ [A] ──────▶ [B] ──────▶ [C] final
//!     (immediate step)
//! ```
//!
//! Tiles never coordinate with each other; in a row they finish at
//! different times, which gives the board its ripple.

mod animator;
mod cursor;
mod events;

pub use animator::{Frame, TileAnimator};
pub use cursor::TileCursor;
pub use events::FlapEvent;
