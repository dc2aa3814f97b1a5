//! Visual-mode selection ranges.
//!
//! A [`Selection`] is derived on demand from the anchor captured when a visual
//! mode was entered and the live cursor. It owns no buffer state, so it is
//! rebuilt for every render and every selection operation.
//!
//! # Example
//!
//! ```
//! use viquill::editor::cursor::Cursor;
//! use viquill::editor::selection::{Selection, SelectionKind};
//!
//! // Anchor after the cursor: the range is normalized.
//! let sel = Selection::new(Cursor::new(2, 0), Cursor::new(1, 1), SelectionKind::Character);
//! assert_eq!(sel.start(), Cursor::new(2, 0));
//! assert!(sel.is_selected(2, 0));
//! assert!(sel.is_selected(0, 1));
//! assert!(!sel.is_selected(2, 1));
//! ```

use super::cursor::Cursor;

/// How a selection treats columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Character-wise: starts and ends at exact columns (both inclusive).
    Character,
    /// Line-wise: whole rows, columns ignored.
    Line,
}

/// A normalized selection range where `start` precedes `end` in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    start: Cursor,
    end: Cursor,
    kind: SelectionKind,
}

impl Selection {
    /// Builds a selection from the anchor and the cursor, in either order.
    pub fn new(anchor: Cursor, cursor: Cursor, kind: SelectionKind) -> Self {
        let (start, end) = if (cursor.row, cursor.col) < (anchor.row, anchor.col) {
            (cursor, anchor)
        } else {
            (anchor, cursor)
        };
        Self { start, end, kind }
    }

    pub fn start(&self) -> Cursor {
        self.start
    }

    pub fn end(&self) -> Cursor {
        self.end
    }

    pub fn kind(&self) -> SelectionKind {
        self.kind
    }

    /// Returns true if the cell at column `x` of row `y` is inside the selection.
    pub fn is_selected(&self, x: usize, y: usize) -> bool {
        if y < self.start.row || y > self.end.row {
            return false;
        }
        if self.kind == SelectionKind::Line {
            return true;
        }

        let first = y == self.start.row;
        let last = y == self.end.row;
        match (first, last) {
            (true, true) => self.start.col <= x && x <= self.end.col,
            (true, false) => x >= self.start.col,
            (false, true) => x <= self.end.col,
            (false, false) => true,
        }
    }

    /// Copies the selected text out of `lines`, one entry per selected row.
    ///
    /// The end column is inclusive for character-wise selections; it is clamped
    /// to the line so a cursor on the append position selects through the end.
    pub fn extract(&self, lines: &[String]) -> Vec<String> {
        let last = self.end.row.min(lines.len().saturating_sub(1));
        let mut out = Vec::new();

        for (y, line) in lines.iter().enumerate().take(last + 1).skip(self.start.row) {
            let text: String = match self.kind {
                SelectionKind::Line => line.clone(),
                SelectionKind::Character => line
                    .chars()
                    .enumerate()
                    .filter(|(x, _)| self.is_selected(*x, y))
                    .map(|(_, ch)| ch)
                    .collect(),
            };
            out.push(text);
        }

        out
    }
}
