//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar, with a one-column margin around content
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = chunks[0].inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    (content, chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", view_label(app.state.current_view)),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    // Feedback goes before hints so it survives truncation on narrow terminals
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
        spans.push(Span::raw(" |"));
    }

    if app.show_hints {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            get_view_hints(app.state.current_view),
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn view_label(view: View) -> &'static str {
    match view {
        View::Home => "home",
        View::Result => "result",
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> &'static str {
    match view {
        View::Home => "Tab:focus  Enter:submit  ^F:finish  ^U:clear  Esc:quit",
        View::Result => "j/k:nav  y:copy  Esc:back",
    }
}
