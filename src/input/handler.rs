//! Input event handler for polling and routing keyboard events.
//!
//! Routing depends on the editor mode and runs in this order for every key:
//!
//! 1. A pending `f`/`F` search consumes the key as its target character.
//! 2. In Command and Execute modes the key edits the command line and nothing
//!    else happens.
//! 3. Escape returns to Normal mode and arrow keys move the cursor.
//! 4. In Insert mode, Enter, Backspace, Delete and printable characters edit the
//!    buffer.
//! 5. The key is offered to the hotkey dispatcher.

use super::defaults::default_hotkeys;
use super::hotkeys::{Dispatch, HotkeyDispatcher, HotkeyRegistry};
use super::keys::{KeyCode, KeyEvent, Modifiers};
use crate::editor::mode::EditorMode;
use crate::editor::state::EditorState;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use std::time::Duration;
use termion::event::{Event, Key};
use termion::input::{Events, TermRead};
use tracing::trace;

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Handles terminal input events and updates editor state.
///
/// The InputHandler polls for termion events, converts them to [`KeyEvent`]s
/// and routes them according to the current [`EditorMode`].
pub struct InputHandler {
    /// Event source iterator (maintains position in input buffer)
    events: EventSource,
    dispatcher: HotkeyDispatcher,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin and uses the default
    /// hotkeys.
    ///
    /// # Example
    ///
    /// ```
    /// use viquill::input::InputHandler;
    ///
    /// let handler = InputHandler::new();
    /// ```
    pub fn new() -> Self {
        Self::with_registry(default_hotkeys())
    }

    /// Creates an InputHandler that reads from stdin and dispatches hotkeys
    /// from `registry`.
    pub fn with_registry(registry: HotkeyRegistry) -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
            dispatcher: HotkeyDispatcher::new(registry),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin is not a terminal.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
            dispatcher: HotkeyDispatcher::new(default_hotkeys()),
        })
    }

    pub fn dispatcher(&self) -> &HotkeyDispatcher {
        &self.dispatcher
    }

    /// Polls for a terminal event.
    ///
    /// Returns Some(Event) if an event occurred, None if the input ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the event system fails
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        // Use the stored events iterator to maintain position in the input buffer.
        match &mut self.events {
            EventSource::Stdin(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result.context("Failed to read terminal event")?));
                }
            }
            EventSource::Tty(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result.context("Failed to read terminal event")?));
                }
            }
        }

        Ok(None)
    }

    /// Handles a terminal event and updates editor state.
    ///
    /// Returns Ok(true) if the application should quit. Ctrl+C always quits.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use viquill::editor::state::EditorState;
    /// use viquill::input::InputHandler;
    /// use termion::event::{Event, Key};
    ///
    /// let mut handler = InputHandler::new();
    /// let mut state = EditorState::new();
    /// let should_quit = handler.handle_event(Event::Key(Key::Ctrl('c')), &mut state).unwrap();
    /// assert!(should_quit);
    /// ```
    pub fn handle_event(&mut self, event: Event, state: &mut EditorState) -> Result<bool> {
        let Event::Key(key) = event else {
            return Ok(state.should_quit());
        };

        if key == Key::Ctrl('c') {
            state.request_quit();
            return Ok(true);
        }

        match KeyEvent::from_termion(key) {
            Some(key) => self.handle_key(key, state),
            None => trace!(?key, "ignoring unsupported key"),
        }

        Ok(state.should_quit())
    }

    /// Routes one key press.
    ///
    /// # Example
    ///
    /// ```
    /// use viquill::editor::cursor::Cursor;
    /// use viquill::editor::state::EditorState;
    /// use viquill::input::keys::{KeyCode, KeyEvent};
    /// use viquill::input::InputHandler;
    ///
    /// let mut handler = InputHandler::new();
    /// let mut state = EditorState::from_text("hello world");
    ///
    /// handler.handle_key(KeyEvent::ctrl(KeyCode::Right), &mut state);
    /// assert_eq!(state.cursor(), Cursor::new(6, 0));
    /// ```
    pub fn handle_key(&mut self, key: KeyEvent, state: &mut EditorState) {
        if let Some(direction) = state.pending_find() {
            state.set_pending_find(None);
            if let Some(target) = key.printable() {
                state.find_char(direction, target);
            }
            return;
        }

        if state.mode().is_command_line() {
            self.handle_command_line_key(key, state);
            return;
        }

        if key.code == KeyCode::Esc {
            state.set_mode(EditorMode::Normal);
        }

        self.handle_navigation_key(key, state);

        if state.mode() == EditorMode::Insert {
            self.handle_insert_key(key, state);
        }

        if let Dispatch::Fired(name) = self.dispatcher.dispatch(&key, state) {
            trace!(command = %name, "key handled by hotkey");
        }
    }

    fn handle_navigation_key(&mut self, key: KeyEvent, state: &mut EditorState) {
        let word_wise = key.modifiers.contains(Modifiers::CTRL);
        let line_wise = state.mode() == EditorMode::VisualLine;

        match key.code {
            KeyCode::Left if word_wise => state.move_word_backward(),
            KeyCode::Right if word_wise => state.move_word_forward(),
            KeyCode::Left => state.move_cursor(-1, 0),
            KeyCode::Right => state.move_cursor(1, 0),
            KeyCode::Up if line_wise => state.move_line_wise(-1),
            KeyCode::Down if line_wise => state.move_line_wise(1),
            KeyCode::Up => state.move_cursor(0, -1),
            KeyCode::Down => state.move_cursor(0, 1),
            KeyCode::Home => state.move_to_line_start(),
            KeyCode::End => state.move_to_line_end(),
            _ => {}
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent, state: &mut EditorState) {
        match key.code {
            KeyCode::Enter => state.insert_newline(),
            KeyCode::Backspace => state.backspace(),
            KeyCode::Delete => state.delete_char_under_cursor(),
            _ => {
                if let Some(ch) = key.printable() {
                    state.insert_char(ch);
                }
            }
        }
    }

    fn handle_command_line_key(&mut self, key: KeyEvent, state: &mut EditorState) {
        match key.code {
            KeyCode::Esc => state.cancel_command_line(),
            KeyCode::Enter => state.submit_command_line(),
            code => {
                let Some(input) = state.command_line_mut() else {
                    return;
                };
                match code {
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_home(),
                    KeyCode::End => input.move_end(),
                    _ => {
                        if let Some(ch) = key.printable() {
                            input.type_char(ch);
                        }
                    }
                }
            }
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::cursor::Cursor;

    fn type_keys(handler: &mut InputHandler, state: &mut EditorState, keys: &str) {
        for c in keys.chars() {
            handler.handle_key(KeyEvent::char(c), state);
        }
    }

    #[test]
    fn test_handler_creation() {
        let handler = InputHandler::new();
        assert!(!handler.dispatcher().registry().is_empty());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut handler = InputHandler::new();
        let mut state = EditorState::new();
        let quit = handler
            .handle_event(Event::Key(Key::Ctrl('c')), &mut state)
            .unwrap();
        assert!(quit);
    }

    #[test]
    fn test_movement_keys_dont_quit() {
        let mut handler = InputHandler::new();
        let mut state = EditorState::from_text("ab\ncd");
        for key in [Key::Char('j'), Key::Char('l'), Key::Down, Key::Left] {
            assert!(!handler.handle_event(Event::Key(key), &mut state).unwrap());
        }
    }

    #[test]
    fn test_escape_returns_to_normal() {
        let mut handler = InputHandler::new();
        let mut state = EditorState::from_text("abc");
        type_keys(&mut handler, &mut state, "i");
        assert_eq!(state.mode(), EditorMode::Insert);

        handler.handle_key(KeyEvent::plain(KeyCode::Esc), &mut state);
        assert_eq!(state.mode(), EditorMode::Normal);
    }

    #[test]
    fn test_insert_mode_types_hotkey_characters() {
        let mut handler = InputHandler::new();
        let mut state = EditorState::new();
        type_keys(&mut handler, &mut state, "i");
        type_keys(&mut handler, &mut state, "dd:/x");

        assert_eq!(state.buffer().lines(), &["dd:/x"]);
        assert_eq!(state.mode(), EditorMode::Insert);
        assert_eq!(state.cursor(), Cursor::new(5, 0));
    }

    #[test]
    fn test_command_mode_swallows_hotkeys() {
        let mut handler = InputHandler::new();
        let mut state = EditorState::from_text("one\ntwo");
        type_keys(&mut handler, &mut state, ":dd");

        assert_eq!(state.mode(), EditorMode::Command);
        assert_eq!(state.command_line().unwrap().text(), ":dd");
        assert_eq!(state.buffer().line_count(), 2);
    }

    #[test]
    fn test_pending_find_consumes_next_key() {
        let mut handler = InputHandler::new();
        let mut state = EditorState::from_text("a-b-c");
        type_keys(&mut handler, &mut state, "f-");
        assert_eq!(state.cursor(), Cursor::new(1, 0));
        assert_eq!(state.pending_find(), None);

        // Non-character keys cancel the search.
        type_keys(&mut handler, &mut state, "f");
        handler.handle_key(KeyEvent::plain(KeyCode::Esc), &mut state);
        assert_eq!(state.pending_find(), None);
        assert_eq!(state.cursor(), Cursor::new(1, 0));
    }

    #[test]
    fn test_home_and_end() {
        let mut handler = InputHandler::new();
        let mut state = EditorState::from_text("abc");
        handler.handle_key(KeyEvent::plain(KeyCode::End), &mut state);
        assert_eq!(state.cursor(), Cursor::new(3, 0));
        handler.handle_key(KeyEvent::plain(KeyCode::Home), &mut state);
        assert_eq!(state.cursor(), Cursor::new(0, 0));
    }
}
