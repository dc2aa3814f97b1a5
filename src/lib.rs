//! viquill - a terminal-based modal text editor with vi-style keybindings.
//!
//! The crate is split into an editing core and the terminal glue around it:
//!
//! - [`editor`]: line buffer, cursor, selection, command line and mode state
//! - [`input`]: key events, hotkey dispatch and the per-mode input routing
//! - [`render`]: the renderer-agnostic [`render::RenderModel`]
//! - [`ui`], [`theme`]: ratatui widgets and color themes
//! - [`config`], [`logging`]: configuration file and tracing setup

pub mod config;
pub mod editor;
pub mod input;
pub mod logging;
pub mod render;
pub mod theme;
pub mod ui;
