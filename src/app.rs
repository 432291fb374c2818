//! Application state and core logic

use crate::config::TuiConfig;
use crate::router::{NavHost, Route};
use crate::state::{AppState, FormFocus, ResultScreen, SubmitOutcome, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Route back stack
    pub nav: NavHost,
    /// Whether the app should quit
    quit: bool,
    /// One-shot feedback shown in the status bar, cleared on the next key
    pub status_message: Option<String>,
    /// Whether the status bar shows key hints
    pub show_hints: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: AppState::new(config.initial_entries()),
            nav: NavHost::new(),
            quit: false,
            status_message: None,
            show_hints: config.show_hints(),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Result => self.handle_result_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let on_input = self.state.form.focus == FormFocus::Input;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab => self.state.form.focus_next(),
            KeyCode::BackTab => self.state.form.focus_prev(),
            KeyCode::Char('f') if ctrl => self.finish(),
            KeyCode::Char('u') if ctrl => self.state.form.clear_input(),
            KeyCode::Enter => match self.state.form.focus {
                FormFocus::Input | FormFocus::Submit => self.submit(),
                FormFocus::Finish => self.finish(),
            },
            KeyCode::Esc => self.quit = true,
            KeyCode::Backspace if on_input => self.state.form.pop_char(),
            KeyCode::Char(c) if on_input && !ctrl => self.state.form.push_char(c),
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        let Some(result) = self.state.result.as_mut() else {
            self.go_back();
            return;
        };

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => result.select_next(),
            KeyCode::Up | KeyCode::Char('k') => result.select_prev(),
            KeyCode::Char('y') => {
                let list_data = result.list_data().to_string();
                self.status_message = Some(match self.copy_to_clipboard(&list_data) {
                    Ok(()) => "Copied transfer string".to_string(),
                    Err(err) => {
                        tracing::warn!("clipboard copy failed: {err:#}");
                        format!("Copy failed: {err}")
                    }
                });
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => self.go_back(),
            _ => {}
        }
    }

    /// Commit the pending input, or latch the form's error flag
    pub fn submit(&mut self) {
        match self.state.form.submit() {
            SubmitOutcome::Committed(entries) => {
                tracing::debug!(count = entries.len(), "entry committed");
            }
            SubmitOutcome::Rejected => {
                tracing::debug!("rejected blank entry");
            }
        }
    }

    /// Hand the current list to the result view
    pub fn finish(&mut self) {
        self.state.form.finish(&mut self.nav);
        self.sync_route();
    }

    /// Go back to the previous route
    pub fn go_back(&mut self) {
        if self.nav.pop_back_stack() {
            self.sync_route();
        }
    }

    /// Rebuild view state from the current route
    fn sync_route(&mut self) {
        match self.nav.current_route() {
            Route::Home => {
                self.state.result = None;
                self.state.current_view = View::Home;
            }
            Route::Result { list_data } => {
                self.state.result = Some(ResultScreen::open(list_data));
                self.state.current_view = View::Result;
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Entry;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn new_app() -> App {
        App::new(&TuiConfig::default())
    }

    mod home {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_app_starts_home_with_defaults() {
            let app = new_app();
            assert_eq!(app.state.current_view, View::Home);
            assert_eq!(names(app.state.form.entries()), vec!["Tanu", "Tina", "Tono"]);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_config_seeds_list() {
            let config = TuiConfig {
                initial_names: Some(vec!["Ada".to_string()]),
                show_hints: Some(false),
            };
            let app = App::new(&config);
            assert_eq!(names(app.state.form.entries()), vec!["Ada"]);
            assert!(!app.show_hints);
        }

        #[test]
        fn test_type_and_enter_commits() {
            let mut app = new_app();
            type_text(&mut app, "  Budi ");
            app.handle_key(key(KeyCode::Enter));

            assert_eq!(
                names(app.state.form.entries()),
                vec!["Tanu", "Tina", "Tono", "Budi"]
            );
            assert_eq!(app.state.form.pending(), "");
        }

        #[test]
        fn test_enter_on_blank_latches_error() {
            let mut app = new_app();
            type_text(&mut app, "   ");
            app.handle_key(key(KeyCode::Enter));

            assert!(app.state.form.show_error());
            assert_eq!(app.state.form.entries().len(), 3);

            type_text(&mut app, "x");
            assert!(!app.state.form.show_error());
        }

        #[test]
        fn test_submit_button_applies_same_rule() {
            let mut app = new_app();
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.state.form.focus, FormFocus::Submit);

            app.handle_key(key(KeyCode::Enter));
            assert!(app.state.form.show_error());
        }

        #[test]
        fn test_chars_ignored_off_input() {
            let mut app = new_app();
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "abc");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.form.pending(), "");
        }

        #[test]
        fn test_backspace_and_clear_line() {
            let mut app = new_app();
            type_text(&mut app, "Adam");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.form.pending(), "Ada");

            app.handle_key(ctrl('u'));
            assert_eq!(app.state.form.pending(), "");
        }

        #[test]
        fn test_q_is_text_on_home() {
            let mut app = new_app();
            type_text(&mut app, "q");
            assert_eq!(app.state.form.pending(), "q");
            assert!(!app.should_quit());
        }

        #[test]
        fn test_esc_quits_from_home() {
            let mut app = new_app();
            app.handle_key(key(KeyCode::Esc));
            assert!(app.should_quit());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_finish_button_opens_result_with_snapshot() {
            let mut app = new_app();
            type_text(&mut app, "Budi");
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.state.form.focus, FormFocus::Finish);
            app.handle_key(key(KeyCode::Enter));

            assert_eq!(app.state.current_view, View::Result);
            let result = app.state.result.as_ref().unwrap();
            assert_eq!(result.entries(), app.state.form.entries());
            assert_eq!(
                names(result.entries()),
                vec!["Tanu", "Tina", "Tono", "Budi"]
            );
        }

        #[test]
        fn test_ctrl_f_finishes_from_input() {
            let mut app = new_app();
            app.handle_key(ctrl('f'));
            assert_eq!(app.state.current_view, View::Result);
            assert!(app.nav.can_go_back());
        }

        #[test]
        fn test_empty_list_transfers_as_empty() {
            let mut app = App::new(&TuiConfig {
                initial_names: Some(vec![]),
                ..Default::default()
            });
            app.finish();
            let result = app.state.result.as_ref().unwrap();
            assert!(result.entries().is_empty());
            assert_eq!(result.list_data(), "%5B%5D");
        }

        #[test]
        fn test_back_preserves_home_state() {
            let mut app = new_app();
            app.handle_key(key(KeyCode::Enter));
            type_text(&mut app, "  ");
            app.handle_key(ctrl('f'));
            app.handle_key(key(KeyCode::Esc));

            assert_eq!(app.state.current_view, View::Home);
            assert!(app.state.result.is_none());
            assert_eq!(app.state.form.pending(), "  ");
            assert!(app.state.form.show_error());
            assert!(!app.nav.can_go_back());
        }

        #[test]
        fn test_result_is_independent_copy() {
            let mut app = new_app();
            app.finish();
            app.go_back();
            type_text(&mut app, "Budi");
            app.handle_key(key(KeyCode::Enter));
            app.finish();

            assert_eq!(app.state.result.as_ref().unwrap().entries().len(), 4);
            app.go_back();
            assert_eq!(app.state.form.entries().len(), 4);
        }

        #[test]
        fn test_result_scrolls_and_q_goes_back() {
            let mut app = new_app();
            app.finish();
            app.handle_key(key(KeyCode::Char('j')));
            app.handle_key(key(KeyCode::Down));
            assert_eq!(app.state.result.as_ref().unwrap().selected_index(), 2);
            app.handle_key(key(KeyCode::Char('k')));
            assert_eq!(app.state.result.as_ref().unwrap().selected_index(), 1);

            app.handle_key(key(KeyCode::Char('q')));
            assert_eq!(app.state.current_view, View::Home);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_go_back_at_home_is_noop() {
            let mut app = new_app();
            app.go_back();
            assert_eq!(app.state.current_view, View::Home);
        }

        #[test]
        fn test_status_message_cleared_on_key() {
            let mut app = new_app();
            app.finish();
            app.status_message = Some("Copied transfer string".to_string());
            app.handle_key(key(KeyCode::Char('j')));
            assert!(app.status_message.is_none());
        }
    }
}
