//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line text field. An error state overrides the focus colour.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    has_error: bool,
) {
    let accent = if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let (display, value_style) = if value.is_empty() && !is_active {
        ("(empty)", Style::default().fg(Color::DarkGray))
    } else {
        (value, Style::default())
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(content.block(block), area);
}

/// Draw the one-line helper text under a field, in red when it reports an error
pub fn draw_supporting_text(frame: &mut Frame, area: Rect, text: Option<&str>) {
    if let Some(text) = text {
        let line = Line::from(Span::styled(text, Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(line), area);
    }
}
