//! Layout: rectangles and the placement of tiles in a row.
//!
//! Tile positions are recomputed from the bounds on every render.

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: u16,
    /// Y coordinate (row) of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// The part of `self` that lies inside `other`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return Self::ZERO;
        }
        Self::new(x, y, right - x, bottom - y)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

/// Place `count` tiles of `tile_width` columns left to right inside
/// `bounds`, separated by `gap` columns.
///
/// Tiles that do not fit entirely are left out.
pub fn tile_rects(bounds: Rect, count: usize, tile_width: u16, gap: u16) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(count);
    let mut x = bounds.x;
    for _ in 0..count {
        if tile_width == 0 || x.saturating_add(tile_width) > bounds.right() {
            break;
        }
        rects.push(Rect::new(x, bounds.y, tile_width, bounds.height));
        x = x.saturating_add(tile_width).saturating_add(gap);
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(2, 3, 4, 5);
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);
        assert!(!r.is_empty());
        assert!(Rect::ZERO.is_empty());
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0, 0, 10, 4);
        let b = Rect::new(6, 2, 10, 10);
        assert_eq!(a.intersection(&b), Rect::new(6, 2, 4, 2));
        assert_eq!(a.intersection(&Rect::new(20, 0, 1, 1)), Rect::ZERO);
    }

    #[test]
    fn test_tile_rects() {
        let rects = tile_rects(Rect::new(1, 0, 12, 3), 4, 3, 1);
        assert_eq!(
            rects,
            vec![Rect::new(1, 0, 3, 3), Rect::new(5, 0, 3, 3), Rect::new(9, 0, 3, 3)]
        );
    }
}
