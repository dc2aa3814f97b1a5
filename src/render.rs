//! Renderer-independent snapshot of what the editor should display.
//!
//! [`RenderModel::build`] reads an [`EditorState`] and produces the visible
//! slice of the buffer with a [`StyleTag`] per character, the cursor's screen
//! position, the status line and the command line. It never deals with
//! colors; mapping tags to colors is the job of [`crate::ui`].
//!
//! # Example
//!
//! ```
//! use viquill::editor::state::EditorState;
//! use viquill::render::{RenderModel, StyleTag};
//!
//! let mut state = EditorState::from_text("abc\ndef");
//! state.set_cursor(2, 0);
//! state.enter_visual();
//! state.set_cursor(1, 1);
//!
//! let model = RenderModel::build(&state);
//! assert_eq!(model.lines[0].cells[2], ('c', StyleTag::Selected));
//! assert_eq!(model.lines[1].cells[2], ('f', StyleTag::Normal));
//! ```

use crate::editor::mode::EditorMode;
use crate::editor::selection::SelectionKind;
use crate::editor::state::{EditorState, Message};

/// Display class of a single character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleTag {
    #[default]
    Normal,
    Selected,
}

/// One visible buffer row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// 1-based line number in the buffer.
    pub number: usize,
    pub cells: Vec<(char, StyleTag)>,
}

impl RenderedLine {
    /// The visible text of the row.
    pub fn text(&self) -> String {
        self.cells.iter().map(|(c, _)| c).collect()
    }
}

/// Where the terminal cursor should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPosition {
    /// Inside the text area, relative to its top-left corner.
    Text { x: usize, y: usize },
    /// On the command line at column `x`.
    CommandLine { x: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub mode: EditorMode,
    /// The mode label padded into a badge, e.g. `"  NORMAL  "`.
    pub badge: String,
    /// File name and `row/lines:col`, all 1-based.
    pub info: String,
}

impl StatusLine {
    pub fn text(&self) -> String {
        format!("{} {}", self.badge, self.info)
    }
}

/// Content of the bottom line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CommandLineView {
    #[default]
    Empty,
    /// The command line being edited, prefix included.
    Input(String),
    Message(Message),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub lines: Vec<RenderedLine>,
    pub cursor: CursorPosition,
    pub status: StatusLine,
    pub command_line: CommandLineView,
}

impl RenderModel {
    /// Builds the model for the current viewport of `state`.
    pub fn build(state: &EditorState) -> Self {
        let buffer = state.buffer();
        let controller = state.controller();
        let viewport = controller.viewport();
        let (offset_row, offset_col) = (controller.offset_row(), controller.offset_col());
        let selection = state.selection();

        let last_row = (offset_row + viewport.height).min(buffer.line_count());
        let lines = (offset_row..last_row)
            .map(|row| {
                let line = buffer.line(row).unwrap_or_default();
                let mut cells: Vec<(char, StyleTag)> = line
                    .chars()
                    .enumerate()
                    .skip(offset_col)
                    .take(viewport.width)
                    .map(|(col, ch)| {
                        let selected = selection.is_some_and(|s| s.is_selected(col, row));
                        let tag = if selected {
                            StyleTag::Selected
                        } else {
                            StyleTag::Normal
                        };
                        (ch, tag)
                    })
                    .collect();
                // An empty row in a line-wise selection still shows one marked cell.
                let whole_row_selected = selection
                    .is_some_and(|s| s.kind() == SelectionKind::Line && s.is_selected(0, row));
                if line.is_empty() && whole_row_selected && viewport.width > 0 {
                    cells.push((' ', StyleTag::Selected));
                }
                RenderedLine {
                    number: row + 1,
                    cells,
                }
            })
            .collect();

        let cursor = state.cursor();
        let (cursor, command_line) = match state.command_line() {
            Some(input) if state.mode().is_command_line() => (
                CursorPosition::CommandLine { x: input.cursor() },
                CommandLineView::Input(input.text()),
            ),
            _ => (
                CursorPosition::Text {
                    x: cursor.col.saturating_sub(offset_col),
                    y: cursor.row.saturating_sub(offset_row),
                },
                state
                    .message()
                    .cloned()
                    .map_or(CommandLineView::Empty, CommandLineView::Message),
            ),
        };

        let status = StatusLine {
            mode: state.mode(),
            badge: format!("  {}  ", state.mode()),
            info: format!(
                "{} {}/{}:{}",
                state.filename().unwrap_or("[No Name]"),
                state.cursor().row + 1,
                buffer.line_count(),
                state.cursor().col + 1
            ),
        };

        Self {
            lines,
            cursor,
            status,
            command_line,
        }
    }
}
