//! The built-in hotkey table.
//!
//! [`default_hotkeys`] builds a fresh registry on every call, so each editor
//! session (and each test) gets its own independent copy.

use super::hotkeys::{HotkeyCommand, HotkeyRegistry};
use crate::editor::mode::EditorMode;
use crate::editor::state::{EditorState, FindDirection};

use EditorMode::{Normal, Visual, VisualLine};

/// Returns a registry holding the standard vi-style bindings.
///
/// # Example
///
/// ```
/// use viquill::input::defaults::default_hotkeys;
///
/// let registry = default_hotkeys();
/// assert!(registry.get("dd").is_some());
/// assert!(registry.get("gg").is_some());
/// ```
pub fn default_hotkeys() -> HotkeyRegistry {
    let mut registry = HotkeyRegistry::new();

    // Entering Insert mode
    registry.register(
        &["i"],
        HotkeyCommand::new("Insert", "Insert before the cursor", &[Normal], |s| {
            s.set_mode(EditorMode::Insert)
        }),
    );
    registry.register(
        &["I"],
        HotkeyCommand::new("Insert At Start", "Insert at the start of the line", &[Normal], |s| {
            s.move_to_line_start();
            s.set_mode(EditorMode::Insert);
        }),
    );
    registry.register(
        &["a"],
        HotkeyCommand::new("Append", "Insert after the cursor", &[Normal], |s| {
            s.move_cursor(1, 0);
            s.set_mode(EditorMode::Insert);
        }),
    );
    registry.register(
        &["A"],
        HotkeyCommand::new("Append At End", "Insert at the end of the line", &[Normal], |s| {
            s.move_to_line_end();
            s.set_mode(EditorMode::Insert);
        }),
    );
    registry.register(
        &["o"],
        HotkeyCommand::new("Open Below", "Open a new line below", &[Normal], |s| {
            s.open_line_below()
        }),
    );
    registry.register(
        &["O"],
        HotkeyCommand::new("Open Above", "Open a new line above", &[Normal], |s| {
            s.open_line_above()
        }),
    );

    // Visual modes
    registry.register(
        &["v"],
        HotkeyCommand::new("Visual", "Toggle character-wise selection", &[Normal, Visual], toggle_visual),
    );
    registry.register(
        &["V"],
        HotkeyCommand::new("Visual Line", "Start a line-wise selection", &[Normal], |s| {
            s.enter_visual_line()
        }),
    );

    // Command line
    registry.register(
        &[":"],
        HotkeyCommand::new("Command", "Open the command line", &[Normal, Visual, VisualLine], |s| {
            s.enter_command_line(EditorMode::Command)
        }),
    );
    registry.register(
        &["/"],
        HotkeyCommand::new("Search", "Open the search line", &[Normal, Visual, VisualLine], |s| {
            s.enter_command_line(EditorMode::Execute)
        }),
    );

    // Motions
    registry.register(
        &["0"],
        HotkeyCommand::new("Line Start", "Move to column 0", &[Normal, Visual], |s| {
            s.move_to_line_start()
        }),
    );
    registry.register(
        &["$"],
        HotkeyCommand::new("Line End", "Move to the last character", &[Normal, Visual], |s| {
            s.move_to_last_char()
        }),
    );
    registry.register(
        &["G"],
        HotkeyCommand::new("Last Line", "Move to the last line", &[Normal, Visual, VisualLine], |s| {
            s.move_to_last_line()
        }),
    );
    registry.register(
        &["gg"],
        HotkeyCommand::new("First Line", "Move to the first line", &[Normal, Visual, VisualLine], |s| {
            s.move_to_first_line()
        }),
    );
    registry.register(
        &["w"],
        HotkeyCommand::new("Word Forward", "Move to the next word", &[Normal, Visual], |s| {
            s.move_word_forward()
        }),
    );
    registry.register(
        &["b"],
        HotkeyCommand::new("Word Backward", "Move to the previous word", &[Normal, Visual], |s| {
            s.move_word_backward()
        }),
    );
    registry.register(
        &["h"],
        HotkeyCommand::new("Left", "Move left", &[Normal, Visual], |s| s.move_cursor(-1, 0)),
    );
    registry.register(
        &["j"],
        HotkeyCommand::new("Down", "Move down", &[Normal, Visual], |s| s.move_cursor(0, 1)),
    );
    registry.register(
        &["k"],
        HotkeyCommand::new("Up", "Move up", &[Normal, Visual], |s| s.move_cursor(0, -1)),
    );
    registry.register(
        &["l"],
        HotkeyCommand::new("Right", "Move right", &[Normal, Visual], |s| s.move_cursor(1, 0)),
    );
    registry.register(
        &["f"],
        HotkeyCommand::new("Find", "Find a character forward", &[Normal, Visual], |s| {
            s.set_pending_find(Some(FindDirection::Forward))
        }),
    );
    registry.register(
        &["F"],
        HotkeyCommand::new("Find Backward", "Find a character backward", &[Normal, Visual], |s| {
            s.set_pending_find(Some(FindDirection::Backward))
        }),
    );

    // Editing
    registry.register(
        &["x"],
        HotkeyCommand::new("Delete Char", "Delete the character under the cursor", &[Normal], |s| {
            s.delete_char_under_cursor()
        }),
    );
    registry.register(
        &["dd"],
        HotkeyCommand::new("Delete Line", "Delete the current line", &[Normal], |s| {
            s.delete_line()
        }),
    );
    registry.register(
        &["p"],
        HotkeyCommand::new("Put", "Put the register after the cursor", &[Normal], |s| {
            s.paste_after()
        }),
    );
    registry.register(
        &["y"],
        HotkeyCommand::new("Yank", "Yank the selection", &[Visual, VisualLine], |s| {
            s.yank_selection()
        }),
    );
    registry.register(
        &["d"],
        HotkeyCommand::new("Delete", "Delete the selection", &[Visual, VisualLine], |s| {
            s.delete_selection()
        }),
    );

    registry
}

fn toggle_visual(state: &mut EditorState) {
    if state.mode() == Visual {
        state.set_mode(Normal);
    } else {
        state.enter_visual();
    }
}
