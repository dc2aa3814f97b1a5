//! Editor mode management for modal editing.
//!
//! This module provides the `EditorMode` enum that represents the current editing
//! mode in viquill. Following vi-style modal editing, exactly one mode is active
//! at a time and it decides which component receives key input.
//!
//! # Modes
//!
//! - **Normal**: The default mode for navigation and commands
//! - **Insert**: Typed characters are inserted into the buffer
//! - **Visual** / **VisualLine**: Character-wise or line-wise selection
//! - **Command**: A `:` command line is being typed
//! - **Execute**: A `/` search line is being typed
//!
//! # Example
//!
//! ```
//! use viquill::editor::mode::EditorMode;
//!
//! // Editor starts in Normal mode by default
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! assert_eq!(format!("{}", mode), "NORMAL");
//!
//! let mode = EditorMode::VisualLine;
//! assert_eq!(format!("{}", mode), "V-LINE");
//! ```

use std::fmt;

/// Represents the current editing mode of the editor.
///
/// The mode is typically displayed in the status line using the `Display`
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorMode {
    /// Navigation and commands. The initial mode.
    #[default]
    Normal,
    /// Typed characters edit the buffer.
    Insert,
    /// Character-wise selection.
    Visual,
    /// Line-wise selection.
    VisualLine,
    /// Typing a `:` command.
    Command,
    /// Typing a `/` search.
    Execute,
}

impl EditorMode {
    /// Returns true for the modes whose input goes to the command line.
    pub fn is_command_line(&self) -> bool {
        matches!(self, EditorMode::Command | EditorMode::Execute)
    }

    /// Returns true for the selection modes.
    pub fn is_visual(&self) -> bool {
        matches!(self, EditorMode::Visual | EditorMode::VisualLine)
    }
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase label for the status line.
    ///
    /// # Examples
    ///
    /// ```
    /// use viquill::editor::mode::EditorMode;
    ///
    /// assert_eq!(format!("{}", EditorMode::Insert), "INSERT");
    /// assert_eq!(format!("{}", EditorMode::Execute), "SEARCH");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::Insert => write!(f, "INSERT"),
            EditorMode::Visual => write!(f, "VISUAL"),
            EditorMode::VisualLine => write!(f, "V-LINE"),
            EditorMode::Command => write!(f, "COMMAND"),
            EditorMode::Execute => write!(f, "SEARCH"),
        }
    }
}

/// Emitted by the editor state whenever the mode actually changes.
///
/// The UI consumes these instead of reading editor fields directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChanged {
    pub from: EditorMode,
    pub to: EditorMode,
}
