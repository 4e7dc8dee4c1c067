//! Buffer module: the in-memory render target.
//!
//! - [`Cell`]: one column of a rendered board
//! - [`Buffer`]: a grid of cells
//! - [`Rgb`]: true-color representation
//! - [`Modifiers`]: text style bitflags
//! - [`Style`]: colors + modifiers for text runs

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use buffer::{Buffer, Style};
pub use cell::{Cell, Modifiers, Rgb};
