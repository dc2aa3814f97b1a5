//! Line-based text buffer.
//!
//! This module provides the [`TextBuffer`] that owns the ordered sequence of
//! lines being edited and performs every structural mutation on it. Columns are
//! character indices, so multi-byte text behaves the same as ASCII.
//!
//! The buffer never tracks a cursor. Each operation receives explicit
//! coordinates and the caller is responsible for moving its own cursor
//! afterwards. The buffer always holds at least one line.
//!
//! # Example
//!
//! ```
//! use viquill::editor::buffer::TextBuffer;
//!
//! let mut buffer = TextBuffer::from_text("ab\ncd");
//! buffer.split_line(0, 2).unwrap();
//! assert_eq!(buffer.lines(), &["ab", "", "cd"]);
//! ```

use super::error::EditError;

/// Ordered, never-empty sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

/// Converts a character index into a byte index within `line`.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

impl TextBuffer {
    /// Creates a buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Creates a buffer from text, splitting on line breaks.
    ///
    /// Empty text still yields one empty line.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        Self::from_lines(lines)
    }

    /// Creates a buffer from prepared lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    /// Joins all lines with `\n`.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Length of a line in characters, or 0 for a row that does not exist.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines
            .get(row)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    fn check(&self, row: usize, col: usize) -> Result<(), EditError> {
        if row >= self.lines.len() || col > self.line_len(row) {
            return Err(EditError::OutOfRange { row, col });
        }
        Ok(())
    }

    /// Inserts `ch` before column `col` of `row`.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> Result<(), EditError> {
        self.check(row, col)?;
        let line = &mut self.lines[row];
        let idx = byte_index(line, col);
        line.insert(idx, ch);
        Ok(())
    }

    /// Deletes the character before column `col` (backspace).
    ///
    /// At column 0 of a row other than the first, the row is joined onto the
    /// previous one. Returns the position the caller's cursor should move to as
    /// `(col, row)`, or `None` when nothing changed (column 0 of row 0).
    pub fn delete_char_before(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<Option<(usize, usize)>, EditError> {
        self.check(row, col)?;

        if col > 0 {
            let line = &mut self.lines[row];
            let idx = byte_index(line, col - 1);
            line.remove(idx);
            return Ok(Some((col - 1, row)));
        }

        if row == 0 {
            return Ok(None);
        }

        self.join_with_previous(row).map(Some)
    }

    /// Deletes the character at column `col`. Returns whether a character was removed.
    pub fn delete_char_at(&mut self, row: usize, col: usize) -> Result<bool, EditError> {
        self.check(row, col)?;
        if col == self.line_len(row) {
            return Ok(false);
        }
        let line = &mut self.lines[row];
        let idx = byte_index(line, col);
        line.remove(idx);
        Ok(true)
    }

    /// Splits `row` at `col`: the row keeps `line[..col]` and `line[col..]` is
    /// inserted as a new row right after it.
    pub fn split_line(&mut self, row: usize, col: usize) -> Result<(), EditError> {
        self.check(row, col)?;
        let line = &mut self.lines[row];
        let idx = byte_index(line, col);
        let rest = line.split_off(idx);
        self.lines.insert(row + 1, rest);
        Ok(())
    }

    /// Appends `row` onto `row - 1` and removes `row`.
    ///
    /// Returns `(col, row)` of the join point: the previous line's length before
    /// the join, on the previous row.
    pub fn join_with_previous(&mut self, row: usize) -> Result<(usize, usize), EditError> {
        if row == 0 || row >= self.lines.len() {
            return Err(EditError::OutOfRange { row, col: 0 });
        }
        let current = self.lines.remove(row);
        let join_col = self.line_len(row - 1);
        self.lines[row - 1].push_str(&current);
        Ok((join_col, row - 1))
    }

    /// Inserts an empty line so that it becomes `row`. `row` may equal the line
    /// count to append at the end.
    pub fn insert_blank_line_at(&mut self, row: usize) -> Result<(), EditError> {
        if row > self.lines.len() {
            return Err(EditError::OutOfRange { row, col: 0 });
        }
        self.lines.insert(row, String::new());
        Ok(())
    }

    /// Inserts `text` at `(row, col)`, where `\n` starts a new line.
    ///
    /// Returns `(col, row)` just past the inserted text.
    pub fn insert_text(
        &mut self,
        row: usize,
        col: usize,
        text: &str,
    ) -> Result<(usize, usize), EditError> {
        self.check(row, col)?;
        let (mut row, mut col) = (row, col);
        for ch in text.chars() {
            if ch == '\n' {
                self.split_line(row, col)?;
                row += 1;
                col = 0;
            } else {
                self.insert_char(row, col, ch)?;
                col += 1;
            }
        }
        Ok((col, row))
    }

    /// Removes `row` and returns its content. The last remaining line is cleared
    /// instead of removed.
    pub fn remove_line(&mut self, row: usize) -> Result<String, EditError> {
        if row >= self.lines.len() {
            return Err(EditError::OutOfRange { row, col: 0 });
        }
        if self.lines.len() == 1 {
            return Ok(std::mem::take(&mut self.lines[0]));
        }
        Ok(self.lines.remove(row))
    }

    /// Removes the character range from `(start_col, start_row)` up to but not
    /// including `(end_col, end_row)`, joining the two boundary rows.
    pub fn delete_range(
        &mut self,
        (start_col, start_row): (usize, usize),
        (end_col, end_row): (usize, usize),
    ) -> Result<(), EditError> {
        self.check(start_row, start_col)?;
        self.check(end_row, end_col)?;
        if (end_row, end_col) < (start_row, start_col) {
            return Err(EditError::OutOfRange {
                row: end_row,
                col: end_col,
            });
        }

        let tail = {
            let end_line = &self.lines[end_row];
            end_line[byte_index(end_line, end_col)..].to_string()
        };
        let start_line = &mut self.lines[start_row];
        let idx = byte_index(start_line, start_col);
        start_line.truncate(idx);
        start_line.push_str(&tail);
        self.lines.drain(start_row + 1..=end_row);
        Ok(())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
