//! Editor state and mode management.
//!
//! This module provides the core editing engine: the line buffer, cursor and
//! scroll tracking, selections, the command line and the session state that
//! ties them together. It follows vi-style modal editing with Normal, Insert,
//! Visual, VisualLine, Command and Execute modes.
//!
//! # Modules
//!
//! - `buffer`: Line storage and structural mutations
//! - `cursor`: Cursor position, clamping and viewport scrolling
//! - `selection`: Character-wise and line-wise selection ranges
//! - `word`: Word-boundary and character search on a single line
//! - `command_line`: The `:`/`/` input line
//! - `commands`: Parsing of submitted `:` commands
//! - `mode`: Editor mode enumeration and mode-change messages
//! - `state`: Editor session state (buffer, mode, cursor, etc.)
//!
//! # Example
//!
//! ```
//! use viquill::editor::mode::EditorMode;
//!
//! // Editor starts in Normal mode
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! ```

pub mod buffer;
pub mod command_line;
pub mod commands;
pub mod cursor;
pub mod error;
pub mod mode;
pub mod selection;
pub mod state;
pub mod word;
