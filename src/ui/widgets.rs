//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListState},
    Frame,
};

/// Which part of a list stays visible when it is taller than its area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScroll {
    /// Highlight this index and keep it on screen
    Selected(usize),
    /// No highlight; the last item stays on screen
    Tail,
}

/// Render a list, scrolled according to `scroll`
pub fn render_list(frame: &mut Frame, area: Rect, list: List, scroll: ListScroll) {
    let (list, selected) = match scroll {
        ListScroll::Selected(index) => (list, index),
        ListScroll::Tail => {
            let last = list.len().saturating_sub(1);
            (list.highlight_style(Style::default()), last)
        }
    };

    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
