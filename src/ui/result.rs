//! Result view: read-only list decoded from the transfer string

use super::widgets::{render_list, ListScroll};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub const TITLE: &str = "List of names";
pub const EMPTY_PLACEHOLDER: &str = "(No data)";

/// Draw the result view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // List
        ])
        .split(area);

    let title = Paragraph::new(Line::from(TITLE).centered())
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    let entries = app
        .state
        .result
        .as_ref()
        .map(|result| result.entries())
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if entries.is_empty() {
        let placeholder = Paragraph::new(Line::from(EMPTY_PLACEHOLDER).centered())
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(Line::from(entry.name.as_str()).centered()))
        .collect();

    let list = List::new(items)
        .block(block.title(format!(" {} ", entries.len())))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let selected = app
        .state
        .result
        .as_ref()
        .map(|result| result.selected_index())
        .unwrap_or(0);
    render_list(frame, chunks[1], list, ListScroll::Selected(selected));
}
