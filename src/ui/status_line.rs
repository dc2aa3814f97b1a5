//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - A colored badge with the current mode (NORMAL, INSERT, VISUAL, ...)
//! - Filename (or "[No Name]")
//! - Cursor position as `row/lines:col`, 1-based
//!
//! Example status line: `  NORMAL   notes.txt 5/20:3`

use crate::editor::mode::EditorMode;
use crate::render::StatusLine;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line.
///
/// `badge_mode` selects the badge color and is tracked separately from the
/// label, from the mode changes the editor reports.
pub fn render_status_line(
    f: &mut Frame,
    area: Rect,
    status: &StatusLine,
    badge_mode: EditorMode,
    colors: &ThemeColors,
) {
    let default_style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);
    let badge_style = Style::default()
        .fg(Color::White)
        .bg(colors.badge(badge_mode))
        .add_modifier(Modifier::BOLD);

    let left_len = status.badge.chars().count() + 1 + status.info.chars().count();
    let padding = (area.width as usize).saturating_sub(left_len);

    let line = Line::from(vec![
        Span::styled(status.badge.as_str(), badge_style),
        Span::styled(format!(" {}", status.info), default_style),
        Span::styled(" ".repeat(padding), default_style),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
