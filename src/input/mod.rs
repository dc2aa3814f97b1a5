//! Input handling for keyboard events and vi-style keybindings.

pub mod defaults;
pub mod handler;
pub mod hotkeys;
pub mod keys;

pub use handler::InputHandler;
pub use keys::KeyEvent;
