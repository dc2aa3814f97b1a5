//! Keyboard event types and key-token canonicalization.
//!
//! Terminal input arrives as termion [`Key`]s. They are converted into the
//! backend-independent [`KeyEvent`] that the rest of the editor works with, and
//! every `KeyEvent` has one canonical *token* used to build hotkey sequences.
//!
//! # Tokens
//!
//! A token is the key name or literal character, preceded by the active
//! modifiers in the fixed order `Ctrl+`, `Alt+`, `Shift+`. `Shift+` is never
//! emitted for characters, because the character itself already carries the
//! case (`A` rather than `Shift+a`).
//!
//! ```
//! use viquill::input::keys::{KeyCode, KeyEvent, Modifiers};
//!
//! assert_eq!(KeyEvent::char('d').token(), "d");
//! assert_eq!(KeyEvent::new(KeyCode::Char('w'), Modifiers::CTRL).token(), "Ctrl+w");
//! assert_eq!(
//!     KeyEvent::new(KeyCode::Left, Modifiers::SHIFT | Modifiers::CTRL).token(),
//!     "Ctrl+Shift+Left"
//! );
//! ```

use bitflags::bitflags;
use std::fmt;
use termion::event::Key;

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const CTRL  = 0b0001;
        const ALT   = 0b0010;
        const SHIFT = 0b0100;
    }
}

/// The key that was pressed, without modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(' ') => write!(f, "Space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Esc => write!(f, "Esc"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::BackTab => write!(f, "BackTab"),
            KeyCode::Left => write!(f, "Left"),
            KeyCode::Right => write!(f, "Right"),
            KeyCode::Up => write!(f, "Up"),
            KeyCode::Down => write!(f, "Down"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::Insert => write!(f, "Insert"),
            KeyCode::F(n) => write!(f, "F{}", n),
        }
    }
}

/// One key press as seen by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key press without modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, Modifiers::empty())
    }

    /// A plain character key press.
    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, Modifiers::CTRL)
    }

    /// Returns the character this key types, if it types one.
    ///
    /// Ctrl and Alt chords never type text.
    pub fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.modifiers.intersects(Modifiers::CTRL | Modifiers::ALT) => {
                Some(c)
            }
            KeyCode::Tab if self.modifiers.is_empty() => Some('\t'),
            _ => None,
        }
    }

    /// Returns the canonical token for this key press.
    pub fn token(&self) -> String {
        let mut token = String::new();
        if self.modifiers.contains(Modifiers::CTRL) {
            token.push_str("Ctrl+");
        }
        if self.modifiers.contains(Modifiers::ALT) {
            token.push_str("Alt+");
        }
        if self.modifiers.contains(Modifiers::SHIFT) && !matches!(self.code, KeyCode::Char(_)) {
            token.push_str("Shift+");
        }
        token.push_str(&self.code.to_string());
        token
    }

    /// Converts a termion key. Returns `None` for keys the editor ignores.
    ///
    /// # Example
    ///
    /// ```
    /// use termion::event::Key;
    /// use viquill::input::keys::{KeyCode, KeyEvent, Modifiers};
    ///
    /// assert_eq!(KeyEvent::from_termion(Key::Char('\n')), Some(KeyEvent::plain(KeyCode::Enter)));
    /// assert_eq!(
    ///     KeyEvent::from_termion(Key::CtrlRight),
    ///     Some(KeyEvent::new(KeyCode::Right, Modifiers::CTRL))
    /// );
    /// ```
    pub fn from_termion(key: Key) -> Option<Self> {
        let event = match key {
            Key::Char('\n') => Self::plain(KeyCode::Enter),
            Key::Char('\t') => Self::plain(KeyCode::Tab),
            Key::Char(c) => Self::char(c),
            Key::Ctrl(c) => Self::ctrl(KeyCode::Char(c)),
            Key::Alt(c) => Self::new(KeyCode::Char(c), Modifiers::ALT),
            Key::Esc => Self::plain(KeyCode::Esc),
            Key::Backspace => Self::plain(KeyCode::Backspace),
            Key::Delete => Self::plain(KeyCode::Delete),
            Key::BackTab => Self::plain(KeyCode::BackTab),
            Key::Insert => Self::plain(KeyCode::Insert),
            Key::Home => Self::plain(KeyCode::Home),
            Key::End => Self::plain(KeyCode::End),
            Key::PageUp => Self::plain(KeyCode::PageUp),
            Key::PageDown => Self::plain(KeyCode::PageDown),
            Key::F(n) => Self::plain(KeyCode::F(n)),
            Key::Left => Self::plain(KeyCode::Left),
            Key::Right => Self::plain(KeyCode::Right),
            Key::Up => Self::plain(KeyCode::Up),
            Key::Down => Self::plain(KeyCode::Down),
            Key::CtrlLeft => Self::ctrl(KeyCode::Left),
            Key::CtrlRight => Self::ctrl(KeyCode::Right),
            Key::CtrlUp => Self::ctrl(KeyCode::Up),
            Key::CtrlDown => Self::ctrl(KeyCode::Down),
            Key::AltLeft => Self::new(KeyCode::Left, Modifiers::ALT),
            Key::AltRight => Self::new(KeyCode::Right, Modifiers::ALT),
            Key::AltUp => Self::new(KeyCode::Up, Modifiers::ALT),
            Key::AltDown => Self::new(KeyCode::Down, Modifiers::ALT),
            Key::ShiftLeft => Self::new(KeyCode::Left, Modifiers::SHIFT),
            Key::ShiftRight => Self::new(KeyCode::Right, Modifiers::SHIFT),
            Key::ShiftUp => Self::new(KeyCode::Up, Modifiers::SHIFT),
            Key::ShiftDown => Self::new(KeyCode::Down, Modifiers::SHIFT),
            _ => return None,
        };
        Some(event)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}
