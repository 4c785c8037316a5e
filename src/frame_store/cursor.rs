// SPDX-License-Identifier: MPL-2.0
//! Navigation cursor over the frame sequence.

/// Index of the frame currently shown in the gallery.
///
/// Invariant: `index < len` whenever `len > 0`. With an empty sequence the
/// index is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationCursor {
    index: usize,
}

impl NavigationCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Jumps to `index`, clamped into `0..len`.
    pub fn move_to(&mut self, index: usize, len: usize) {
        self.index = index.min(len.saturating_sub(1));
    }

    /// Moves one frame forward. Returns `false` at the last frame.
    pub fn advance(&mut self, len: usize) -> bool {
        if self.index + 1 < len {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves one frame back. Returns `false` at the first frame.
    pub fn retreat(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(self, len: usize) -> bool {
        self.index + 1 >= len
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_to_clamps_to_last_frame() {
        let mut cursor = NavigationCursor::new();
        cursor.move_to(42, 5);
        assert_eq!(cursor.index(), 4);
    }

    #[test]
    fn move_to_on_empty_sequence_stays_at_zero() {
        let mut cursor = NavigationCursor::new();
        cursor.move_to(3, 0);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn advance_is_noop_at_last_frame() {
        let mut cursor = NavigationCursor::new();
        cursor.move_to(2, 3);
        assert!(!cursor.advance(3));
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn retreat_is_noop_at_first_frame() {
        let mut cursor = NavigationCursor::new();
        assert!(!cursor.retreat());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn walk_forward_and_back_stays_in_range() {
        let len = 4;
        let mut cursor = NavigationCursor::new();
        for _ in 0..10 {
            cursor.advance(len);
            assert!(cursor.index() < len);
        }
        assert!(cursor.is_last(len));
        for _ in 0..10 {
            cursor.retreat();
        }
        assert!(cursor.is_first());
    }
}
