//! `TileCursor`: the index state of one flap.

/// Current, previous and target positions within a tile's alphabet.
///
/// `None` stands for "nothing shown yet": a fresh cursor has no current
/// or previous symbol and targets index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileCursor {
    /// Symbol currently on the upper face.
    pub current: Option<usize>,
    /// Symbol that was showing before the last step.
    pub previous: Option<usize>,
    /// Where the tile is heading.
    pub target: usize,
}

impl TileCursor {
    /// A cursor before its first animation.
    pub const fn new() -> Self {
        Self {
            current: None,
            previous: None,
            target: 0,
        }
    }

    /// Back to the fresh state.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether the tile shows its target.
    #[inline]
    pub const fn is_final(&self) -> bool {
        matches!(self.current, Some(c) if c == self.target)
    }

    /// Advance one symbol forward in an alphabet of `len` entries.
    ///
    /// Flaps only rotate one way: the index after `len - 1` is `0`, and a
    /// fresh cursor starts at `0`.
    pub const fn step(&mut self, len: usize) {
        self.previous = self.current;
        self.current = match self.current {
            Some(c) if c + 1 < len => Some(c + 1),
            _ => Some(0),
        };
    }

    /// Number of steps from the current position to the target.
    pub const fn steps_remaining(&self, len: usize) -> usize {
        match self.current {
            None => self.target + 1,
            Some(c) if c >= len => self.target + 1,
            Some(c) => (self.target + len - c) % len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fresh_cursor() {
        let cursor = TileCursor::new();
        assert_eq!(cursor.current, None);
        assert_eq!(cursor.previous, None);
        assert_eq!(cursor.target, 0);
        assert!(!cursor.is_final());
    }

    #[test]
    fn test_first_step_lands_on_zero() {
        let mut cursor = TileCursor::new();
        cursor.step(5);
        assert_eq!(cursor.current, Some(0));
        assert_eq!(cursor.previous, None);
        assert!(cursor.is_final());
    }

    #[test]
    fn test_wraps_to_zero() {
        let mut cursor = TileCursor {
            current: Some(3),
            previous: Some(2),
            target: 1,
        };
        cursor.step(4);
        assert_eq!(cursor.current, Some(0));
        assert_eq!(cursor.previous, Some(3));
    }

    #[test]
    fn test_out_of_range_current_wraps() {
        // A cursor left on a transient entry after the alphabet shrank.
        let mut cursor = TileCursor {
            current: Some(11),
            previous: Some(10),
            target: 2,
        };
        cursor.step(11);
        assert_eq!(cursor.current, Some(0));
    }

    proptest! {
        #[test]
        fn prop_forward_only_step_count(len in 1usize..64, current in 0usize..64, target in 0usize..64) {
            let current = current % len;
            let target = target % len;
            let mut cursor = TileCursor { current: Some(current), previous: None, target };
            let expected = (target + len - current) % len;
            prop_assert_eq!(cursor.steps_remaining(len), expected);

            let mut steps = 0;
            while !cursor.is_final() {
                cursor.step(len);
                steps += 1;
                prop_assert!(cursor.current.unwrap() < len);
            }
            prop_assert_eq!(steps, expected);
        }

        #[test]
        fn prop_fresh_cursor_takes_target_plus_one(len in 1usize..64, target in 0usize..64) {
            let target = target % len;
            let mut cursor = TileCursor { target, ..TileCursor::new() };
            let mut steps = 0;
            loop {
                cursor.step(len);
                steps += 1;
                if cursor.is_final() {
                    break;
                }
            }
            prop_assert_eq!(steps, target + 1);
        }
    }
}
