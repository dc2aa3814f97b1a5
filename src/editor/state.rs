//! Editor state management.
//!
//! This module provides the `EditorState` struct that owns one editing session:
//! the text buffer, the cursor controller, the current mode, the visual-mode
//! anchor, the command line, the yank register and the message shown to the
//! user.
//!
//! `EditorState` exposes editing *operations* (insert a character, delete the
//! selection, move a word forward, ...). Deciding which operation a key press
//! triggers is the job of [`crate::input::InputHandler`].
//!
//! # Example
//!
//! ```
//! use viquill::editor::state::EditorState;
//! use viquill::editor::mode::EditorMode;
//! use viquill::editor::cursor::Cursor;
//!
//! let mut state = EditorState::from_text("ab\ncd");
//! assert_eq!(state.mode(), EditorMode::Normal);
//!
//! state.set_mode(EditorMode::Insert);
//! state.set_cursor(2, 0);
//! state.insert_newline();
//! assert_eq!(state.buffer().lines(), &["ab", "", "cd"]);
//! assert_eq!(state.cursor(), Cursor::new(0, 1));
//! ```

use tracing::{debug, warn};

use super::buffer::TextBuffer;
use super::command_line::CommandLineInput;
use super::commands::ExCommand;
use super::cursor::{Cursor, CursorController, ViewportSize};
use super::error::EditError;
use super::mode::{EditorMode, ModeChanged};
use super::selection::{Selection, SelectionKind};
use super::word;

/// Represents a message to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Direction of a pending `f`/`F` character search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindDirection {
    Forward,
    Backward,
}

/// Text captured by a yank or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    pub lines: Vec<String>,
    pub linewise: bool,
}

/// Manages the complete runtime state of one editing session.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    buffer: TextBuffer,
    controller: CursorController,
    mode: EditorMode,
    anchor: Option<Cursor>,
    command_line: Option<CommandLineInput>,
    mode_changes: Vec<ModeChanged>,
    message: Option<Message>,
    filename: Option<String>,
    register: Option<Register>,
    last_search: Option<String>,
    pending_find: Option<FindDirection>,
    show_line_numbers: bool,
    quit_requested: bool,
}

impl EditorState {
    /// Creates a session with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session editing `text`.
    pub fn from_text(text: &str) -> Self {
        Self::with_buffer(TextBuffer::from_text(text))
    }

    pub fn with_buffer(buffer: TextBuffer) -> Self {
        Self {
            buffer,
            ..Self::default()
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.controller.cursor()
    }

    pub fn controller(&self) -> &CursorController {
        &self.controller
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switches mode, recording a [`ModeChanged`] when the mode actually differs.
    ///
    /// Leaving the visual modes drops the anchor; leaving the command-line modes
    /// drops the command line.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if mode == self.mode {
            return;
        }
        let from = self.mode;
        debug!(%from, to = %mode, "mode change");

        if from.is_visual() && !mode.is_visual() {
            self.anchor = None;
        }
        if from.is_command_line() && !mode.is_command_line() {
            self.command_line = None;
        }

        self.mode = mode;
        self.mode_changes.push(ModeChanged { from, to: mode });
    }

    /// Drains the mode transitions recorded since the last call.
    pub fn take_mode_changes(&mut self) -> Vec<ModeChanged> {
        std::mem::take(&mut self.mode_changes)
    }

    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        self.controller.set_viewport(viewport, &self.buffer);
    }

    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        self.controller.move_by(dx, dy, &self.buffer);
    }

    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.controller.set_position(x, y, &self.buffer);
    }

    /// Moves `dy` rows and puts the cursor at the end of the target line.
    pub fn move_line_wise(&mut self, dy: isize) {
        let row = self.cursor().row.saturating_add_signed(dy);
        self.set_cursor(usize::MAX, row);
    }

    pub fn move_to_line_start(&mut self) {
        self.set_cursor(0, self.cursor().row);
    }

    /// Moves onto the last character of the line.
    pub fn move_to_last_char(&mut self) {
        let row = self.cursor().row;
        self.set_cursor(self.buffer.line_len(row).saturating_sub(1), row);
    }

    pub fn move_to_line_end(&mut self) {
        self.set_cursor(usize::MAX, self.cursor().row);
    }

    pub fn move_to_first_line(&mut self) {
        self.set_cursor(0, 0);
    }

    pub fn move_to_last_line(&mut self) {
        self.set_cursor(0, self.buffer.line_count() - 1);
    }

    /// Moves to the next word start, or to the start of the next line when
    /// already at the end of the current one.
    pub fn move_word_forward(&mut self) {
        let Cursor { col, row } = self.cursor();
        let line = self.buffer.line(row).unwrap_or_default();
        let next = word::next_word_boundary(line, col);

        if next != col {
            self.set_cursor(next, row);
        } else if row + 1 < self.buffer.line_count() {
            self.set_cursor(0, row + 1);
        }
    }

    /// Moves to the previous word start, or to the end of the previous line
    /// when already at the start of the current one.
    pub fn move_word_backward(&mut self) {
        let Cursor { col, row } = self.cursor();
        let line = self.buffer.line(row).unwrap_or_default();
        let prev = word::prev_word_boundary(line, col);

        if prev != col {
            self.set_cursor(prev, row);
        } else if row > 0 {
            self.set_cursor(self.buffer.line_len(row - 1), row - 1);
        }
    }

    pub fn pending_find(&self) -> Option<FindDirection> {
        self.pending_find
    }

    pub fn set_pending_find(&mut self, direction: Option<FindDirection>) {
        self.pending_find = direction;
    }

    /// Jumps to the next or previous `target` on the current line.
    ///
    /// Returns false, leaving the cursor in place, when there is no match.
    pub fn find_char(&mut self, direction: FindDirection, target: char) -> bool {
        let Cursor { col, row } = self.cursor();
        let line = self.buffer.line(row).unwrap_or_default();
        let found = match direction {
            FindDirection::Forward => word::next_occurrence(line, col, target),
            FindDirection::Backward => word::prev_occurrence(line, col, target),
        };

        match found {
            Some(x) => {
                self.set_cursor(x, row);
                true
            }
            None => false,
        }
    }

    /// Inserts `ch` at the cursor and moves past it.
    pub fn insert_char(&mut self, ch: char) {
        let Cursor { col, row } = self.cursor();
        if absorb(self.buffer.insert_char(row, col, ch)).is_some() {
            self.move_cursor(1, 0);
        }
    }

    /// Splits the line at the cursor and moves to the start of the new line.
    pub fn insert_newline(&mut self) {
        let Cursor { col, row } = self.cursor();
        if absorb(self.buffer.split_line(row, col)).is_some() {
            self.set_cursor(0, row + 1);
        }
    }

    /// Deletes the character before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) {
        let Cursor { col, row } = self.cursor();
        if let Some(Some((x, y))) = absorb(self.buffer.delete_char_before(row, col)) {
            self.set_cursor(x, y);
        }
    }

    /// Deletes the character under the cursor.
    pub fn delete_char_under_cursor(&mut self) {
        let Cursor { col, row } = self.cursor();
        absorb(self.buffer.delete_char_at(row, col));
        self.controller.clamp(&self.buffer);
    }

    /// Deletes the current line into the register.
    pub fn delete_line(&mut self) {
        let Cursor { row, .. } = self.cursor();
        if let Some(line) = absorb(self.buffer.remove_line(row)) {
            self.register = Some(Register {
                lines: vec![line],
                linewise: true,
            });
        }
        self.set_cursor(0, row);
    }

    /// Opens an empty line below the cursor and starts inserting on it.
    pub fn open_line_below(&mut self) {
        let row = self.cursor().row + 1;
        if absorb(self.buffer.insert_blank_line_at(row)).is_some() {
            self.set_cursor(0, row);
        }
        self.set_mode(EditorMode::Insert);
    }

    /// Opens an empty line at the cursor row and starts inserting on it.
    pub fn open_line_above(&mut self) {
        let row = self.cursor().row;
        if absorb(self.buffer.insert_blank_line_at(row)).is_some() {
            self.set_cursor(0, row);
        }
        self.set_mode(EditorMode::Insert);
    }

    pub fn anchor(&self) -> Option<Cursor> {
        self.anchor
    }

    /// Enters Visual mode anchored at the cursor.
    pub fn enter_visual(&mut self) {
        self.set_mode(EditorMode::Visual);
        self.anchor = Some(self.cursor());
    }

    /// Enters VisualLine mode anchored at the start of the current row, with
    /// the cursor at its end.
    pub fn enter_visual_line(&mut self) {
        let row = self.cursor().row;
        self.set_mode(EditorMode::VisualLine);
        self.anchor = Some(Cursor::new(0, row));
        self.move_to_line_end();
    }

    /// The active selection, if a visual mode is on.
    pub fn selection(&self) -> Option<Selection> {
        let kind = match self.mode {
            EditorMode::Visual => SelectionKind::Character,
            EditorMode::VisualLine => SelectionKind::Line,
            _ => return None,
        };
        self.anchor
            .map(|anchor| Selection::new(anchor, self.cursor(), kind))
    }

    pub fn register(&self) -> Option<&Register> {
        self.register.as_ref()
    }

    /// Copies the selection into the register and returns to Normal mode.
    pub fn yank_selection(&mut self) {
        let Some(selection) = self.selection() else {
            return;
        };
        let lines = selection.extract(self.buffer.lines());
        let count = lines.len();
        self.register = Some(Register {
            lines,
            linewise: selection.kind() == SelectionKind::Line,
        });

        self.set_mode(EditorMode::Normal);
        let start = selection.start();
        self.set_cursor(start.col, start.row);
        if count > 1 {
            self.set_message(format!("{} lines yanked", count), MessageLevel::Info);
        }
    }

    /// Moves the selection into the register and returns to Normal mode.
    pub fn delete_selection(&mut self) {
        let Some(selection) = self.selection() else {
            return;
        };
        self.register = Some(Register {
            lines: selection.extract(self.buffer.lines()),
            linewise: selection.kind() == SelectionKind::Line,
        });

        let start = selection.start();
        let end = selection.end();
        match selection.kind() {
            SelectionKind::Line => {
                for _ in start.row..=end.row {
                    absorb(self.buffer.remove_line(start.row));
                }
                self.set_mode(EditorMode::Normal);
                self.set_cursor(0, start.row);
            }
            SelectionKind::Character => {
                let end_col = (end.col + 1).min(self.buffer.line_len(end.row));
                absorb(
                    self.buffer
                        .delete_range((start.col, start.row), (end_col, end.row)),
                );
                self.set_mode(EditorMode::Normal);
                self.set_cursor(start.col, start.row);
            }
        }
    }

    /// Puts the register after the cursor: below the line for line-wise text,
    /// after the cursor character otherwise.
    pub fn paste_after(&mut self) {
        let Some(register) = self.register.clone() else {
            return;
        };
        let Cursor { col, row } = self.cursor();

        if register.linewise {
            for (i, line) in register.lines.iter().enumerate() {
                let target = row + 1 + i;
                if absorb(self.buffer.insert_blank_line_at(target)).is_some() {
                    absorb(self.buffer.insert_text(target, 0, line));
                }
            }
            self.set_cursor(0, row + 1);
        } else {
            let at = (col + 1).min(self.buffer.line_len(row));
            let text = register.lines.join("\n");
            if let Some((x, y)) = absorb(self.buffer.insert_text(row, at, &text)) {
                self.set_cursor(x.saturating_sub(1), y);
            }
        }
    }

    /// Opens the command line for `mode` (Command or Execute).
    ///
    /// Only reachable from Normal and the visual modes, so `:` and `/` typed in
    /// Insert mode stay literal text.
    pub fn enter_command_line(&mut self, mode: EditorMode) {
        let prefix = match mode {
            EditorMode::Command => ':',
            EditorMode::Execute => '/',
            _ => return,
        };
        if !matches!(
            self.mode,
            EditorMode::Normal | EditorMode::Visual | EditorMode::VisualLine
        ) {
            return;
        }

        self.clear_message();
        self.set_mode(mode);
        self.command_line = Some(CommandLineInput::new(prefix));
    }

    pub fn command_line(&self) -> Option<&CommandLineInput> {
        self.command_line.as_ref()
    }

    pub fn command_line_mut(&mut self) -> Option<&mut CommandLineInput> {
        self.command_line.as_mut()
    }

    /// Closes the command line without running it.
    pub fn cancel_command_line(&mut self) {
        if let Some(input) = self.command_line.as_mut() {
            input.cancel();
        }
        self.set_mode(EditorMode::Normal);
    }

    /// Closes the command line and acts on what was typed.
    ///
    /// A `:` line is parsed as an editor command. A `/` line is recorded as the
    /// last search pattern; running the search is left to the caller.
    pub fn submit_command_line(&mut self) {
        let mode = self.mode;
        let Some(text) = self.command_line.as_mut().map(CommandLineInput::submit) else {
            return;
        };
        self.set_mode(EditorMode::Normal);

        match mode {
            EditorMode::Command => {
                let input = text.strip_prefix(':').unwrap_or(&text);
                match ExCommand::parse(input) {
                    Ok(ExCommand::Quit) => self.request_quit(),
                    Ok(ExCommand::Nop) => {}
                    Err(err) => self.set_message(err.to_string(), MessageLevel::Error),
                }
            }
            EditorMode::Execute => {
                let pattern = text.strip_prefix('/').unwrap_or(&text);
                if !pattern.is_empty() {
                    self.set_message(format!("/{}", pattern), MessageLevel::Info);
                    self.last_search = Some(pattern.to_string());
                }
            }
            _ => {}
        }
    }

    pub fn last_search(&self) -> Option<&str> {
        self.last_search.as_deref()
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: String) {
        self.filename = Some(filename);
    }

    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    pub fn set_show_line_numbers(&mut self, show: bool) {
        self.show_line_numbers = show;
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }
}

/// Unwraps a buffer result whose coordinates came from the clamped cursor.
///
/// An error here is an invariant violation: it panics in debug builds and is
/// logged and ignored in release builds.
fn absorb<T>(result: Result<T, EditError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug_assert!(false, "buffer invariant violated: {}", err);
            warn!(%err, "ignoring out-of-range edit");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_normal_mode() {
        let state = EditorState::new();
        assert_eq!(state.mode(), EditorMode::Normal);
        assert_eq!(state.buffer().line_count(), 1);
        assert_eq!(state.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_set_mode_records_changes() {
        let mut state = EditorState::new();
        state.set_mode(EditorMode::Insert);
        state.set_mode(EditorMode::Insert);
        state.set_mode(EditorMode::Normal);

        assert_eq!(
            state.take_mode_changes(),
            vec![
                ModeChanged {
                    from: EditorMode::Normal,
                    to: EditorMode::Insert
                },
                ModeChanged {
                    from: EditorMode::Insert,
                    to: EditorMode::Normal
                },
            ]
        );
        assert!(state.take_mode_changes().is_empty());
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut state = EditorState::new();
        state.insert_char('h');
        state.insert_char('i');
        assert_eq!(state.buffer().lines(), &["hi"]);
        assert_eq!(state.cursor(), Cursor::new(2, 0));

        state.backspace();
        assert_eq!(state.buffer().lines(), &["h"]);
        assert_eq!(state.cursor(), Cursor::new(1, 0));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut state = EditorState::from_text("ab\ncd");
        state.set_cursor(0, 1);
        state.backspace();
        assert_eq!(state.buffer().lines(), &["abcd"]);
        assert_eq!(state.cursor(), Cursor::new(2, 0));
    }

    #[test]
    fn test_backspace_at_buffer_start_is_noop() {
        let mut state = EditorState::from_text("ab");
        state.backspace();
        assert_eq!(state.buffer().lines(), &["ab"]);
        assert_eq!(state.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_word_motion_wraps_lines() {
        let mut state = EditorState::from_text("one two\nthree");
        state.move_word_forward();
        assert_eq!(state.cursor(), Cursor::new(4, 0));
        state.move_word_forward();
        assert_eq!(state.cursor(), Cursor::new(7, 0));
        state.move_word_forward();
        assert_eq!(state.cursor(), Cursor::new(0, 1));

        state.move_word_backward();
        assert_eq!(state.cursor(), Cursor::new(7, 0));
        state.move_word_backward();
        assert_eq!(state.cursor(), Cursor::new(4, 0));
    }

    #[test]
    fn test_word_motion_stops_at_buffer_edges() {
        let mut state = EditorState::from_text("abc");
        state.move_word_backward();
        assert_eq!(state.cursor(), Cursor::new(0, 0));
        state.move_to_line_end();
        state.move_word_forward();
        assert_eq!(state.cursor(), Cursor::new(3, 0));
    }

    #[test]
    fn test_find_char() {
        let mut state = EditorState::from_text("a,b,c");
        assert!(state.find_char(FindDirection::Forward, ','));
        assert_eq!(state.cursor(), Cursor::new(1, 0));
        assert!(state.find_char(FindDirection::Forward, ','));
        assert_eq!(state.cursor(), Cursor::new(3, 0));
        assert!(!state.find_char(FindDirection::Forward, ','));
        assert_eq!(state.cursor(), Cursor::new(3, 0));
        assert!(state.find_char(FindDirection::Backward, 'a'));
        assert_eq!(state.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_delete_line_keeps_buffer_non_empty() {
        let mut state = EditorState::from_text("only");
        state.delete_line();
        assert_eq!(state.buffer().lines(), &[""]);
        assert_eq!(
            state.register(),
            Some(&Register {
                lines: vec!["only".to_string()],
                linewise: true
            })
        );
    }

    #[test]
    fn test_delete_last_row_moves_cursor_up() {
        let mut state = EditorState::from_text("a\nb");
        state.set_cursor(0, 1);
        state.delete_line();
        assert_eq!(state.buffer().lines(), &["a"]);
        assert_eq!(state.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_open_lines() {
        let mut state = EditorState::from_text("a\nb");
        state.open_line_below();
        assert_eq!(state.buffer().lines(), &["a", "", "b"]);
        assert_eq!(state.cursor(), Cursor::new(0, 1));
        assert_eq!(state.mode(), EditorMode::Insert);

        state.set_mode(EditorMode::Normal);
        state.set_cursor(0, 0);
        state.open_line_above();
        assert_eq!(state.buffer().lines(), &["", "a", "", "b"]);
        assert_eq!(state.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_visual_selection_follows_cursor() {
        let mut state = EditorState::from_text("abc\ndef");
        state.set_cursor(2, 0);
        state.enter_visual();
        state.set_cursor(1, 1);

        let selection = state.selection().unwrap();
        assert!(selection.is_selected(2, 0));
        assert!(selection.is_selected(0, 1));
        assert!(!selection.is_selected(2, 1));
    }

    #[test]
    fn test_leaving_visual_drops_anchor() {
        let mut state = EditorState::from_text("abc");
        state.enter_visual();
        assert!(state.anchor().is_some());
        state.set_mode(EditorMode::Normal);
        assert!(state.anchor().is_none());
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_visual_line_anchor() {
        let mut state = EditorState::from_text("abc\ndefg");
        state.set_cursor(1, 1);
        state.enter_visual_line();
        assert_eq!(state.anchor(), Some(Cursor::new(0, 1)));
        assert_eq!(state.cursor(), Cursor::new(4, 1));
        assert_eq!(state.selection().unwrap().kind(), SelectionKind::Line);
    }

    #[test]
    fn test_yank_and_paste_characters() {
        let mut state = EditorState::from_text("hello");
        state.set_cursor(1, 0);
        state.enter_visual();
        state.set_cursor(3, 0);
        state.yank_selection();
        assert_eq!(state.mode(), EditorMode::Normal);
        assert_eq!(state.cursor(), Cursor::new(1, 0));
        assert_eq!(state.register().unwrap().lines, vec!["ell"]);

        state.move_to_last_char();
        state.paste_after();
        assert_eq!(state.buffer().lines(), &["helloell"]);
        assert_eq!(state.cursor(), Cursor::new(7, 0));
    }

    #[test]
    fn test_delete_character_selection() {
        let mut state = EditorState::from_text("abc\ndef\nghi");
        state.set_cursor(1, 0);
        state.enter_visual();
        state.set_cursor(1, 2);
        state.delete_selection();
        assert_eq!(state.buffer().lines(), &["ai"]);
        assert_eq!(state.cursor(), Cursor::new(1, 0));
        assert_eq!(state.register().unwrap().lines, vec!["bc", "def", "gh"]);
    }

    #[test]
    fn test_delete_line_selection_and_paste() {
        let mut state = EditorState::from_text("a\nb\nc");
        state.set_cursor(0, 1);
        state.enter_visual_line();
        state.move_line_wise(1);
        state.delete_selection();
        assert_eq!(state.buffer().lines(), &["a"]);
        assert_eq!(state.cursor(), Cursor::new(0, 0));

        state.paste_after();
        assert_eq!(state.buffer().lines(), &["a", "b", "c"]);
        assert_eq!(state.cursor(), Cursor::new(0, 1));
    }

    #[test]
    fn test_command_line_not_reachable_from_insert() {
        let mut state = EditorState::new();
        state.set_mode(EditorMode::Insert);
        state.enter_command_line(EditorMode::Command);
        assert_eq!(state.mode(), EditorMode::Insert);
        assert!(state.command_line().is_none());
    }

    #[test]
    fn test_submit_quit_command() {
        let mut state = EditorState::new();
        state.enter_command_line(EditorMode::Command);
        let input = state.command_line_mut().unwrap();
        input.type_char('q');
        state.submit_command_line();

        assert!(state.should_quit());
        assert_eq!(state.mode(), EditorMode::Normal);
        assert!(state.command_line().is_none());
    }

    #[test]
    fn test_submit_unknown_command_sets_error() {
        let mut state = EditorState::new();
        state.enter_command_line(EditorMode::Command);
        state.command_line_mut().unwrap().type_char('z');
        state.submit_command_line();

        assert!(!state.should_quit());
        let message = state.message().unwrap();
        assert_eq!(message.level, MessageLevel::Error);
        assert_eq!(message.text, "Not an editor command: z");
    }

    #[test]
    fn test_submit_search_records_pattern() {
        let mut state = EditorState::new();
        state.enter_command_line(EditorMode::Execute);
        for ch in "foo".chars() {
            state.command_line_mut().unwrap().type_char(ch);
        }
        state.submit_command_line();
        assert_eq!(state.last_search(), Some("foo"));
        assert_eq!(state.mode(), EditorMode::Normal);
    }
}
