//! Navigator: Cursor over the buffer store.
//!
//! The cursor is a physical position into the store. Every move clamps to
//! `0..len` (there is no wraparound) and the store's length is passed in by
//! the caller, so the navigator never holds a reference to the store.

/// Number of entries a page-up/page-down moves.
pub const PAGE_SIZE: usize = 10;

/// Direction for paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    /// Towards the oldest entry.
    Up,
    /// Towards the newest entry.
    Down,
}

/// Tracks the displayed position within the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    /// Current position. `None` when the buffer is empty.
    cursor: Option<usize>,
}

impl Navigator {
    /// Create a navigator with no cursor.
    pub const fn new() -> Self {
        Self { cursor: None }
    }

    /// The current position, if the buffer is non-empty.
    pub const fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Move by `delta` entries, clamped to `0..len`.
    ///
    /// Returns `None` when the buffer is empty.
    pub fn move_relative(&mut self, delta: isize, len: usize) -> Option<usize> {
        if len == 0 {
            self.cursor = None;
            return None;
        }
        let current = self.cursor.unwrap_or(len - 1).min(len - 1);
        let target = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs()).min(len - 1)
        };
        self.cursor = Some(target);
        self.cursor
    }

    /// Jump to the oldest entry.
    pub fn move_to_start(&mut self, len: usize) -> Option<usize> {
        self.cursor = (len > 0).then_some(0);
        self.cursor
    }

    /// Jump to the newest entry.
    pub fn move_to_end(&mut self, len: usize) -> Option<usize> {
        self.cursor = len.checked_sub(1);
        self.cursor
    }

    /// Move a full page of [`PAGE_SIZE`] entries.
    #[allow(clippy::cast_possible_wrap)]
    pub fn page(&mut self, direction: PageDirection, len: usize) -> Option<usize> {
        let delta = PAGE_SIZE as isize;
        match direction {
            PageDirection::Up => self.move_relative(-delta, len),
            PageDirection::Down => self.move_relative(delta, len),
        }
    }

    /// Place the cursor at `pos`, clamped to the buffer.
    pub fn jump_to(&mut self, pos: usize, len: usize) -> Option<usize> {
        self.cursor = len.checked_sub(1).map(|last| pos.min(last));
        self.cursor
    }

    /// Re-clamp after the entry at `pos` was removed, leaving `new_len` entries.
    ///
    /// A cursor past the removed slot shifts down by one so it keeps pointing
    /// at the same entry. A cursor on the removed slot stays put and is clamped
    /// to the new length.
    pub fn on_removed(&mut self, pos: usize, new_len: usize) {
        let Some(cursor) = self.cursor else {
            return;
        };
        if new_len == 0 {
            self.cursor = None;
            return;
        }
        let shifted = if cursor > pos { cursor - 1 } else { cursor };
        self.cursor = Some(shifted.min(new_len - 1));
    }

    /// Forget the cursor (buffer was cleared).
    pub fn reset(&mut self) {
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_moves_are_noops() {
        let mut nav = Navigator::new();
        assert_eq!(nav.move_relative(1, 0), None);
        assert_eq!(nav.move_to_start(0), None);
        assert_eq!(nav.move_to_end(0), None);
        assert_eq!(nav.page(PageDirection::Down, 0), None);
        assert_eq!(nav.cursor(), None);
    }

    #[test]
    fn test_move_relative_clamps_without_wrapping() {
        let mut nav = Navigator::new();
        nav.move_to_end(3);
        assert_eq!(nav.move_relative(1, 3), Some(2));
        assert_eq!(nav.move_relative(-1, 3), Some(1));
        assert_eq!(nav.move_relative(-5, 3), Some(0));
        assert_eq!(nav.move_relative(-1, 3), Some(0));
        assert_eq!(nav.move_relative(isize::MAX, 3), Some(2));
        assert_eq!(nav.move_relative(isize::MIN, 3), Some(0));
    }

    #[test]
    fn test_move_relative_stays_in_bounds_for_many_deltas() {
        for len in 1..15 {
            let mut nav = Navigator::new();
            for delta in [-20, -11, -10, -3, -1, 0, 1, 2, 9, 10, 25] {
                let pos = nav.move_relative(delta, len).unwrap();
                assert!(pos < len, "pos {pos} out of bounds for len {len}");
            }
        }
    }

    #[test]
    fn test_page_down_from_start_clamps_to_last() {
        let mut nav = Navigator::new();
        nav.move_to_start(5);
        assert_eq!(nav.page(PageDirection::Down, 5), Some(4));
    }

    #[test]
    fn test_page_moves_exactly_page_size() {
        let mut nav = Navigator::new();
        nav.move_to_start(30);
        assert_eq!(nav.page(PageDirection::Down, 30), Some(10));
        assert_eq!(nav.page(PageDirection::Down, 30), Some(20));
        assert_eq!(nav.page(PageDirection::Up, 30), Some(10));
        nav.jump_to(4, 30);
        assert_eq!(nav.page(PageDirection::Up, 30), Some(0));
    }

    #[test]
    fn test_removing_cursor_entry_reclamps() {
        let mut nav = Navigator::new();
        nav.move_to_end(3);
        // Last entry removed: clamp to the new last.
        nav.on_removed(2, 2);
        assert_eq!(nav.cursor(), Some(1));
        // Middle entry removed while displayed: same slot, now the next entry.
        nav.jump_to(0, 2);
        nav.on_removed(0, 1);
        assert_eq!(nav.cursor(), Some(0));
        nav.on_removed(0, 0);
        assert_eq!(nav.cursor(), None);
    }

    #[test]
    fn test_removing_earlier_entry_shifts_cursor() {
        let mut nav = Navigator::new();
        nav.jump_to(3, 5);
        nav.on_removed(0, 4);
        assert_eq!(nav.cursor(), Some(2));
        nav.on_removed(4, 3);
        assert_eq!(nav.cursor(), Some(2));
    }
}
