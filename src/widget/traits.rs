//! Widget trait.
//!
//! Both display facades implement [`Widget`] so hosts can lay them out and
//! draw them uniformly.

use crate::buffer::Buffer;
use crate::layout::Rect;

/// A UI component that renders into a [`Buffer`].
pub trait Widget {
    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget.
    ///
    /// Called when the layout changes (e.g., terminal resize).
    fn set_bounds(&mut self, bounds: Rect);

    /// Columns and rows the widget needs to draw every tile.
    fn preferred_size(&self) -> (u16, u16);

    /// Render this widget to the given buffer.
    ///
    /// The widget should only write to cells within its bounds.
    fn render(&self, buffer: &mut Buffer);

    /// Check if this widget needs to be redrawn.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after rendering.
    fn clear_redraw(&mut self);
}
