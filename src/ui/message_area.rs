//! Message area rendering for displaying messages and command input.

use crate::editor::state::MessageLevel;
use crate::render::CommandLineView;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the bottom line of the screen.
///
/// Displays:
/// - Command and search modes: the input line with its `:` or `/` prefix
/// - Messages: errors, warnings, info
/// - Empty when no message
pub fn render_message_area(
    f: &mut Frame,
    area: Rect,
    view: &CommandLineView,
    colors: &ThemeColors,
) {
    let content = match view {
        CommandLineView::Input(text) => Line::from(vec![Span::styled(
            text.as_str(),
            Style::default().fg(colors.foreground),
        )]),
        CommandLineView::Message(message) => {
            let color = match message.level {
                MessageLevel::Error => colors.error,
                MessageLevel::Warning => colors.warning,
                MessageLevel::Info => colors.info,
            };
            Line::from(vec![Span::styled(
                message.text.as_str(),
                Style::default().fg(color),
            )])
        }
        CommandLineView::Empty => Line::from(""),
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
