//! UI module for the viquill terminal interface.
//!
//! This module provides the main UI structure for rendering the terminal interface,
//! including layout management and widget composition.

pub mod editor_view;
pub mod message_area;
pub mod status_line;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Position};
use ratatui::Terminal;

use crate::editor::cursor::ViewportSize;
use crate::editor::mode::EditorMode;
use crate::editor::state::EditorState;
use crate::render::{CursorPosition, RenderModel};
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// The UI is composed of three areas:
/// - Text area (top): the visible part of the buffer
/// - Status line (middle): current mode, file name and cursor position
/// - Command line (bottom): `:`/`/` input or messages
///
/// # Example
///
/// ```
/// use viquill::editor::state::EditorState;
/// use viquill::theme::get_builtin_theme;
/// use viquill::ui::UI;
/// use ratatui::backend::TestBackend;
/// use ratatui::Terminal;
///
/// let mut ui = UI::new(get_builtin_theme("default-dark").unwrap());
/// let mut state = EditorState::from_text("hello");
/// let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
/// ui.render(&mut terminal, &mut state).unwrap();
/// ```
pub struct UI {
    theme: Theme,
    badge_mode: EditorMode,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            badge_mode: EditorMode::Normal,
        }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Renders the UI to the terminal.
    ///
    /// Consumes the mode changes recorded by `state` to update the status
    /// badge, hands the text-area size to `state` as its viewport, then draws
    /// a [`RenderModel`] built from it.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        state: &mut EditorState,
    ) -> Result<()> {
        if let Some(change) = state.take_mode_changes().last() {
            self.badge_mode = change.to;
        }

        let colors = &self.theme.colors;
        let badge_mode = self.badge_mode;

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Text area
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Command line
                ])
                .split(f.area());

            let text_area = chunks[0];
            let gutter =
                editor_view::gutter_width(state.show_line_numbers(), state.buffer().line_count());
            state.set_viewport(ViewportSize::new(
                (text_area.width as usize).saturating_sub(gutter),
                text_area.height as usize,
            ));

            let model = RenderModel::build(state);

            editor_view::render_editor_view(f, text_area, &model, gutter, colors);
            status_line::render_status_line(f, chunks[1], &model.status, badge_mode, colors);
            message_area::render_message_area(f, chunks[2], &model.command_line, colors);

            let position = match model.cursor {
                CursorPosition::Text { x, y } => Position::new(
                    text_area.x + (gutter + x) as u16,
                    text_area.y + y as u16,
                ),
                CursorPosition::CommandLine { x } => Position::new(chunks[2].x + x as u16, chunks[2].y),
            };
            f.set_cursor_position(position);
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(40, 6)).unwrap()
    }

    #[test]
    fn test_theme_name() {
        let ui = UI::new(get_builtin_theme("nord").unwrap());
        assert_eq!(ui.theme_name(), "nord");
    }

    #[test]
    fn test_render_sets_viewport_from_layout() {
        let mut ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = terminal();
        let mut state = EditorState::from_text("hello");

        ui.render(&mut terminal, &mut state).unwrap();
        assert_eq!(state.controller().viewport(), ViewportSize::new(40, 4));

        state.set_show_line_numbers(true);
        ui.render(&mut terminal, &mut state).unwrap();
        assert_eq!(state.controller().viewport(), ViewportSize::new(36, 4));
    }

    #[test]
    fn test_badge_follows_mode_changes() {
        let mut ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = terminal();
        let mut state = EditorState::from_text("hello");

        state.set_mode(EditorMode::Insert);
        ui.render(&mut terminal, &mut state).unwrap();
        assert!(state.take_mode_changes().is_empty());

        // The status line is row 4 of 6.
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.content()[4 * 40].bg, Color::Green);
    }

    #[test]
    fn test_command_line_rendered_at_bottom() {
        let mut ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = terminal();
        let mut state = EditorState::from_text("hello");
        state.enter_command_line(EditorMode::Command);

        ui.render(&mut terminal, &mut state).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.content()[5 * 40].symbol(), ":");
    }
}
