//! Text area rendering.
//!
//! Draws the visible rows of a [`RenderModel`], one span per run of cells that
//! share a [`StyleTag`], with an optional line-number gutter.

use crate::render::{RenderModel, RenderedLine, StyleTag};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the line-number gutter for a buffer of `line_count` lines,
/// including the separating space. Zero when numbers are hidden.
///
/// # Example
///
/// ```
/// use viquill::ui::editor_view::gutter_width;
///
/// assert_eq!(gutter_width(false, 5000), 0);
/// assert_eq!(gutter_width(true, 12), 4);
/// assert_eq!(gutter_width(true, 12345), 6);
/// ```
pub fn gutter_width(show_line_numbers: bool, line_count: usize) -> usize {
    if show_line_numbers {
        line_count.to_string().len().max(3) + 1
    } else {
        0
    }
}

/// Renders the text area. `gutter` is the width from [`gutter_width`].
pub fn render_editor_view(
    f: &mut Frame,
    area: Rect,
    model: &RenderModel,
    gutter: usize,
    colors: &ThemeColors,
) {
    let lines: Vec<Line> = model
        .lines
        .iter()
        .map(|line| render_line(line, gutter, colors))
        .collect();

    let paragraph =
        Paragraph::new(lines).style(Style::default().bg(colors.background).fg(colors.foreground));
    f.render_widget(paragraph, area);
}

fn render_line<'a>(line: &RenderedLine, gutter: usize, colors: &ThemeColors) -> Line<'a> {
    let mut spans = Vec::new();

    if gutter > 0 {
        spans.push(Span::styled(
            format!("{:>width$} ", line.number, width = gutter - 1),
            Style::default()
                .fg(colors.line_number)
                .add_modifier(Modifier::DIM),
        ));
    }

    let mut run = String::new();
    let mut run_tag = StyleTag::Normal;
    for &(ch, tag) in &line.cells {
        if tag != run_tag && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), cell_style(run_tag, colors)));
        }
        run_tag = tag;
        // Tabs occupy a single cell.
        run.push(if ch == '\t' { ' ' } else { ch });
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, cell_style(run_tag, colors)));
    }

    Line::from(spans)
}

fn cell_style(tag: StyleTag, colors: &ThemeColors) -> Style {
    match tag {
        StyleTag::Normal => Style::default().fg(colors.foreground),
        StyleTag::Selected => Style::default().fg(colors.foreground).bg(colors.selection_bg),
    }
}
