//! Hotkey registry and key-sequence dispatch.
//!
//! A [`HotkeyRegistry`] maps key sequences to [`HotkeyCommand`]s. A sequence is
//! the concatenation of canonical key tokens (see [`KeyEvent::token`]), so `dd`,
//! `gg` and `Ctrl+w` are all valid sequences.
//!
//! The [`HotkeyDispatcher`] owns a registry plus the keys typed so far. Each key
//! is appended to the pending sequence; an exact match in an applicable mode
//! runs the command and clears the sequence. A single key that could still grow
//! into a registered sequence is kept, anything else is discarded.
//!
//! There is no timeout: a pending prefix waits for the next key indefinitely, and
//! an unmatched two-key sequence is dropped whole, including its last key.
//!
//! # Example
//!
//! ```
//! use viquill::editor::mode::EditorMode;
//! use viquill::editor::state::EditorState;
//! use viquill::input::hotkeys::{Dispatch, HotkeyCommand, HotkeyDispatcher, HotkeyRegistry};
//! use viquill::input::keys::KeyEvent;
//!
//! let mut registry = HotkeyRegistry::new();
//! registry.register(
//!     &["gg"],
//!     HotkeyCommand::new("Top", "Moves to the first line", &[EditorMode::Normal], |s| {
//!         s.move_to_first_line()
//!     }),
//! );
//!
//! let mut dispatcher = HotkeyDispatcher::new(registry);
//! let mut state = EditorState::from_text("a\nb");
//! state.set_cursor(0, 1);
//!
//! assert_eq!(dispatcher.dispatch(&KeyEvent::char('g'), &mut state), Dispatch::Pending);
//! assert_eq!(
//!     dispatcher.dispatch(&KeyEvent::char('g'), &mut state),
//!     Dispatch::Fired("Top".to_string())
//! );
//! assert_eq!(state.cursor().row, 0);
//! ```

use std::collections::HashMap;

use tracing::{debug, trace};

use super::keys::KeyEvent;
use crate::editor::mode::EditorMode;
use crate::editor::state::EditorState;

/// What a hotkey does to the editor.
pub type HotkeyAction = fn(&mut EditorState);

/// A named command bound to one or more key sequences.
#[derive(Debug, Clone)]
pub struct HotkeyCommand {
    pub name: String,
    pub description: String,
    /// Modes the command fires in. Empty means every mode.
    pub modes: Vec<EditorMode>,
    pub action: HotkeyAction,
}

impl HotkeyCommand {
    pub fn new(name: &str, description: &str, modes: &[EditorMode], action: HotkeyAction) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            modes: modes.to_vec(),
            action,
        }
    }

    /// Returns true if the command may fire while in `mode`.
    pub fn applies_to(&self, mode: EditorMode) -> bool {
        self.modes.is_empty() || self.modes.contains(&mode)
    }
}

/// Key sequence to command table. Constructed once and handed to a dispatcher.
#[derive(Debug, Clone, Default)]
pub struct HotkeyRegistry {
    commands: HashMap<String, HotkeyCommand>,
}

impl HotkeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `command` to every sequence in `keys`.
    ///
    /// A sequence that is already bound is overwritten.
    pub fn register(&mut self, keys: &[&str], command: HotkeyCommand) {
        for key in keys {
            if let Some(previous) = self.commands.insert(key.to_string(), command.clone()) {
                debug!(sequence = key, replaced = %previous.name, by = %command.name, "hotkey rebound");
            }
        }
    }

    pub fn get(&self, sequence: &str) -> Option<&HotkeyCommand> {
        self.commands.get(sequence)
    }

    /// Returns true if some registered sequence is strictly longer than and
    /// starts with `sequence`.
    pub fn extends(&self, sequence: &str) -> bool {
        self.commands
            .keys()
            .any(|key| key.len() > sequence.len() && key.starts_with(sequence))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over `(sequence, command)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HotkeyCommand)> {
        self.commands.iter().map(|(key, command)| (key.as_str(), command))
    }
}

/// Outcome of feeding one key to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A command ran; carries its name.
    Fired(String),
    /// The key was kept as the start of a longer sequence.
    Pending,
    /// Nothing matched and the pending keys were discarded.
    Unmatched,
}

/// Matches typed keys against a registry.
#[derive(Debug, Clone, Default)]
pub struct HotkeyDispatcher {
    registry: HotkeyRegistry,
    pending: Vec<String>,
}

impl HotkeyDispatcher {
    pub fn new(registry: HotkeyRegistry) -> Self {
        Self {
            registry,
            pending: Vec::new(),
        }
    }

    pub fn registry(&self) -> &HotkeyRegistry {
        &self.registry
    }

    /// The keys typed so far, as one sequence string.
    pub fn pending(&self) -> String {
        self.pending.concat()
    }

    /// Appends `event` to the pending sequence and runs a command on an exact
    /// match in the current mode.
    pub fn dispatch(&mut self, event: &KeyEvent, state: &mut EditorState) -> Dispatch {
        self.pending.push(event.token());
        let sequence = self.pending.concat();

        if let Some(command) = self.registry.get(&sequence) {
            if command.applies_to(state.mode()) {
                let action = command.action;
                let name = command.name.clone();
                self.pending.clear();
                debug!(%sequence, command = %name, mode = %state.mode(), "hotkey fired");
                action(state);
                return Dispatch::Fired(name);
            }
        }

        if self.pending.len() == 1 && self.registry.extends(&sequence) {
            return Dispatch::Pending;
        }

        trace!(%sequence, "hotkey sequence abandoned");
        self.pending.clear();
        Dispatch::Unmatched
    }
}
