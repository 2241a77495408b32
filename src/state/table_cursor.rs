//! Keyboard cursor and scroll offset for the summary table.

/// Cursor over the summary table rows.
///
/// The cursor is where keyboard navigation points; it is not the selection.
/// A row only becomes selected when the user commits it (Enter or click).
///
/// # Invariant
/// After [`TableCursor::adjust_scroll`], `offset <= cursor < offset + visible_rows`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCursor {
    cursor: usize,
    offset: usize,
}

impl TableCursor {
    /// Cursor on the first row, scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Row the cursor is on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move up `n` rows, clamping at 0.
    pub fn up(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    /// Move down `n` rows, clamping at the last row.
    pub fn down(&mut self, n: usize, row_count: usize) {
        if row_count > 0 {
            self.cursor = self.cursor.saturating_add(n).min(row_count - 1);
        }
    }

    /// Jump to the first row.
    pub fn first(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the last row.
    pub fn last(&mut self, row_count: usize) {
        self.cursor = row_count.saturating_sub(1);
    }

    /// Put the cursor on `row` (caller validates the index).
    pub fn set(&mut self, row: usize) {
        self.cursor = row;
    }

    /// Update the scroll offset so the cursor row is visible.
    pub fn adjust_scroll(&mut self, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + visible_rows {
            self.offset = self.cursor + 1 - visible_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_clamps_at_last_row() {
        let mut cursor = TableCursor::new();
        cursor.down(10, 3);
        assert_eq!(cursor.cursor(), 2);
    }

    #[test]
    fn down_on_empty_table_is_noop() {
        let mut cursor = TableCursor::new();
        cursor.down(1, 0);
        assert_eq!(cursor.cursor(), 0);
    }

    #[test]
    fn up_clamps_at_zero() {
        let mut cursor = TableCursor::new();
        cursor.down(1, 5);
        cursor.up(4);
        assert_eq!(cursor.cursor(), 0);
    }

    #[test]
    fn first_and_last_jump() {
        let mut cursor = TableCursor::new();
        cursor.last(7);
        assert_eq!(cursor.cursor(), 6);
        cursor.first();
        assert_eq!(cursor.cursor(), 0);
    }

    #[test]
    fn last_on_empty_table_stays_at_zero() {
        let mut cursor = TableCursor::new();
        cursor.last(0);
        assert_eq!(cursor.cursor(), 0);
    }

    #[test]
    fn adjust_scroll_follows_cursor_down() {
        let mut cursor = TableCursor::new();
        cursor.down(5, 10);
        cursor.adjust_scroll(3);
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn adjust_scroll_follows_cursor_up() {
        let mut cursor = TableCursor::new();
        cursor.down(9, 10);
        cursor.adjust_scroll(3);
        cursor.up(8);
        cursor.adjust_scroll(3);
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn adjust_scroll_keeps_offset_when_cursor_visible() {
        let mut cursor = TableCursor::new();
        cursor.down(2, 10);
        cursor.adjust_scroll(5);
        assert_eq!(cursor.offset(), 0);
    }
}
