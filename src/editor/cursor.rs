//! Cursor position and viewport scrolling.
//!
//! This module provides the [`Cursor`] struct (a column/row pair) and the
//! [`CursorController`] that owns it together with the viewport scroll offsets.
//! The controller holds indices only; the [`TextBuffer`] is passed in on every
//! move so the bounds always come from the current buffer shape.
//!
//! # Clamping
//!
//! Every move goes through one clamp routine, applied in a fixed order:
//!
//! 1. the row is clamped into `0..line_count`
//! 2. the column is clamped into `0..=line_len(row)` (the append position is valid)
//! 3. the vertical offset is adjusted so the row is visible, then the horizontal
//!    offset so the column is visible
//!
//! # Example
//!
//! ```
//! use viquill::editor::buffer::TextBuffer;
//! use viquill::editor::cursor::{Cursor, CursorController};
//!
//! let buffer = TextBuffer::from_text("ab\ncdef");
//! let mut controller = CursorController::new();
//!
//! controller.set_position(10, 10, &buffer);
//! assert_eq!(controller.cursor(), Cursor::new(4, 1));
//!
//! controller.move_by(-1, -1, &buffer);
//! assert_eq!(controller.cursor(), Cursor::new(2, 0));
//! ```

use super::buffer::TextBuffer;

/// A position in the buffer. `col` is a character index, `row` a line index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub col: usize,
    pub row: usize,
}

impl Cursor {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Size of the text area the renderer will draw into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: usize,
    pub height: usize,
}

impl ViewportSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl Default for ViewportSize {
    /// An 80x24 terminal minus the status and command lines.
    fn default() -> Self {
        Self::new(80, 22)
    }
}

/// Owns the cursor and the scroll offsets and keeps them inside the buffer.
#[derive(Debug, Clone, Default)]
pub struct CursorController {
    cursor: Cursor,
    offset_row: usize,
    offset_col: usize,
    viewport: ViewportSize,
}

impl CursorController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn offset_row(&self) -> usize {
        self.offset_row
    }

    pub fn offset_col(&self) -> usize {
        self.offset_col
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Updates the viewport and re-runs the clamp so the cursor stays visible.
    pub fn set_viewport(&mut self, viewport: ViewportSize, buffer: &TextBuffer) {
        self.viewport = viewport;
        self.clamp(buffer);
    }

    /// Moves relative to the current position. Negative results clamp to 0.
    pub fn move_by(&mut self, dx: isize, dy: isize, buffer: &TextBuffer) {
        let x = self.cursor.col.saturating_add_signed(dx);
        let y = self.cursor.row.saturating_add_signed(dy);
        self.set_position(x, y, buffer);
    }

    /// Moves to `(x, y)`, clamped into the buffer.
    pub fn set_position(&mut self, x: usize, y: usize, buffer: &TextBuffer) {
        self.cursor = Cursor::new(x, y);
        self.clamp(buffer);
    }

    /// Re-applies the bounds after the buffer changed shape underneath the cursor.
    pub fn clamp(&mut self, buffer: &TextBuffer) {
        let last_row = buffer.line_count().saturating_sub(1);
        self.cursor.row = self.cursor.row.min(last_row);
        self.cursor.col = self.cursor.col.min(buffer.line_len(self.cursor.row));
        self.scroll_to_cursor();
    }

    fn scroll_to_cursor(&mut self) {
        let height = self.viewport.height.max(1);
        if self.cursor.row < self.offset_row {
            self.offset_row = self.cursor.row;
        } else if self.cursor.row >= self.offset_row + height {
            self.offset_row = self.cursor.row + 1 - height;
        }

        let width = self.viewport.width.max(1);
        if self.cursor.col < self.offset_col {
            self.offset_col = self.cursor.col;
        } else if self.cursor.col >= self.offset_col + width {
            self.offset_col = self.cursor.col + 1 - width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_bounds(controller: &CursorController, buffer: &TextBuffer) {
        let cursor = controller.cursor();
        assert!(cursor.row < buffer.line_count());
        assert!(cursor.col <= buffer.line_len(cursor.row));
    }

    #[test]
    fn test_starts_at_origin() {
        let controller = CursorController::new();
        assert_eq!(controller.cursor(), Cursor::new(0, 0));
        assert_eq!(controller.offset_row(), 0);
    }

    #[test]
    fn test_row_clamped_before_column() {
        let buffer = TextBuffer::from_text("long line here\nab");
        let mut controller = CursorController::new();
        controller.set_position(10, 5, &buffer);
        // Row clamps to 1 first, so the column uses the length of "ab".
        assert_eq!(controller.cursor(), Cursor::new(2, 1));
    }

    #[test]
    fn test_column_may_equal_line_length() {
        let buffer = TextBuffer::from_text("abc");
        let mut controller = CursorController::new();
        controller.set_position(3, 0, &buffer);
        assert_eq!(controller.cursor(), Cursor::new(3, 0));
    }

    #[test]
    fn test_move_by_negative_clamps_to_zero() {
        let buffer = TextBuffer::from_text("abc");
        let mut controller = CursorController::new();
        controller.move_by(-5, -5, &buffer);
        assert_eq!(controller.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_clamp_invariant_over_many_moves() {
        let buffer = TextBuffer::from_text("hello\n\nworld wide\nx");
        let mut controller = CursorController::new();
        let moves: [(isize, isize); 10] = [
            (3, 0),
            (0, 1),
            (5, 0),
            (0, 1),
            (20, 0),
            (0, 1),
            (-2, 0),
            (0, -3),
            (1, 7),
            (-9, -9),
        ];
        for (dx, dy) in moves {
            controller.move_by(dx, dy, &buffer);
            assert_in_bounds(&controller, &buffer);
        }
        for (x, y) in [(100, 0), (0, 100), (7, 2), (3, 1)] {
            controller.set_position(x, y, &buffer);
            assert_in_bounds(&controller, &buffer);
        }
    }

    #[test]
    fn test_vertical_scroll_follows_cursor() {
        let text: Vec<String> = (0..20).map(|i| format!("line {}", i)).collect();
        let buffer = TextBuffer::from_lines(text);
        let mut controller = CursorController::new();
        controller.set_viewport(ViewportSize::new(80, 5), &buffer);

        controller.set_position(0, 7, &buffer);
        assert_eq!(controller.offset_row(), 3);

        controller.set_position(0, 5, &buffer);
        assert_eq!(controller.offset_row(), 3);

        controller.set_position(0, 1, &buffer);
        assert_eq!(controller.offset_row(), 1);
    }

    #[test]
    fn test_horizontal_scroll_follows_cursor() {
        let buffer = TextBuffer::from_text("abcdefghijklmnopqrstuvwxyz");
        let mut controller = CursorController::new();
        controller.set_viewport(ViewportSize::new(10, 5), &buffer);

        controller.set_position(15, 0, &buffer);
        assert_eq!(controller.offset_col(), 6);

        controller.set_position(2, 0, &buffer);
        assert_eq!(controller.offset_col(), 2);
    }

    #[test]
    fn test_clamp_after_buffer_shrinks() {
        let mut buffer = TextBuffer::from_text("one\ntwo\nthree");
        let mut controller = CursorController::new();
        controller.set_position(5, 2, &buffer);
        buffer.remove_line(2).unwrap();
        controller.clamp(&buffer);
        assert_eq!(controller.cursor(), Cursor::new(3, 1));
    }
}
