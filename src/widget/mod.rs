//! Widgets: drawing split-flap frames into a [`Buffer`](crate::buffer::Buffer).
//!
//! # Architecture
//!
//! Animation state lives in [`crate::tile`]; this module only turns
//! [`Frame`](crate::tile::Frame)s into cells:
//!
//! 1. **Palette**: [`Theme`] and [`Size`] decide colors and tile geometry.
//! 2. **Flap**: [`draw_tile`] paints the upper face, hinge and lower face
//!    of one tile; [`draw_row`] lays a row of tiles out with gaps.
//! 3. **Widget**: the display facades implement [`Widget`] on top of these.

mod flap;
mod palette;
mod traits;

pub use flap::{draw_row, draw_tile, FlapStyle};
pub use palette::{Palette, Size, Theme};
pub use traits::Widget;
