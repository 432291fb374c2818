//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod result;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Result => result::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_home_shows_form_and_list() {
        let app = App::new(&TuiConfig::default());
        let screen = render(&app);
        assert!(screen.contains(home::TITLE));
        assert!(screen.contains("Submit"));
        assert!(screen.contains("Finish"));
        for name in ["Tanu", "Tina", "Tono"] {
            assert!(screen.contains(name), "missing {name}");
        }
        assert!(!screen.contains(home::EMPTY_INPUT_ERROR));
    }

    #[test]
    fn test_home_shows_error_after_blank_submit() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, KeyCode::Enter);
        assert!(render(&app).contains(home::EMPTY_INPUT_ERROR));

        press(&mut app, KeyCode::Char('A'));
        assert!(!render(&app).contains(home::EMPTY_INPUT_ERROR));
    }

    #[test]
    fn test_home_shows_pending_text() {
        let mut app = App::new(&TuiConfig::default());
        for c in "Budi".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(render(&app).contains("Budi"));
    }

    #[test]
    fn test_result_lists_transferred_names() {
        let mut app = App::new(&TuiConfig::default());
        app.finish();
        let screen = render(&app);
        assert!(screen.contains(result::TITLE));
        assert!(screen.contains("Tina"));
        assert!(!screen.contains(result::EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_result_placeholder_for_empty_list() {
        let mut app = App::new(&TuiConfig {
            initial_names: Some(vec![]),
            ..Default::default()
        });
        app.finish();
        assert!(render(&app).contains(result::EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_hints_can_be_hidden() {
        let mut app = App::new(&TuiConfig::default());
        assert!(render(&app).contains("Tab:focus"));
        app.show_hints = false;
        assert!(!render(&app).contains("Tab:focus"));
    }

    #[test]
    fn test_status_message_rendered() {
        let mut app = App::new(&TuiConfig::default());
        app.status_message = Some("Copied transfer string".to_string());
        assert!(render(&app).contains("Copied transfer string"));
    }
}
