//! Terminal output.

mod screen;

pub use screen::Screen;
