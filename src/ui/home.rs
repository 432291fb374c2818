//! Home view: entry form plus the committed list

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::{draw_field, draw_supporting_text};
use super::widgets::{render_list, ListScroll};
use crate::app::App;
use crate::state::FormFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub const TITLE: &str = "Enter item";
pub const EMPTY_INPUT_ERROR: &str = "Input cannot be empty.";
const SUBMIT_LABEL: &str = "Submit";
const FINISH_LABEL: &str = "Finish";
const BUTTON_WIDTH: u16 = 12;

/// Draw the home view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(3),             // Input field
            Constraint::Length(1),             // Supporting text
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Min(0),                // Committed list
        ])
        .split(area);

    let title = Paragraph::new(Line::from(TITLE).centered())
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    draw_field(
        frame,
        chunks[1],
        &form.input().label,
        form.pending(),
        form.focus == FormFocus::Input,
        form.show_error(),
    );
    draw_supporting_text(
        frame,
        chunks[2],
        form.show_error().then_some(EMPTY_INPUT_ERROR),
    );

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(chunks[3]);

    render_button(
        frame,
        buttons[1],
        SUBMIT_LABEL,
        form.focus == FormFocus::Submit,
        form.is_submittable(),
    );
    render_button(
        frame,
        buttons[2],
        FINISH_LABEL,
        form.focus == FormFocus::Finish,
        true,
    );

    draw_entries(frame, chunks[4], app);
}

fn draw_entries(frame: &mut Frame, area: Rect, app: &App) {
    let entries = app.state.form.entries();
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(Line::from(entry.name.as_str()).centered()))
        .collect();

    let block = Block::default()
        .title(format!(" Names ({}) ", entries.len()))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    render_list(frame, area, List::new(items).block(block), ListScroll::Tail);
}
