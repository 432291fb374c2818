//! Application state definitions

use super::forms::EntryForm;
use super::result_state::ResultScreen;
use serde::{Deserialize, Serialize};

/// Names the home screen starts with when no configuration overrides them
pub const DEFAULT_NAMES: &[&str] = &["Tanu", "Tina", "Tono"];

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Entry form with the editable list
    #[default]
    Home,
    /// Read-only summary of a transferred list
    Result,
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The seed list used by a fresh home screen
pub fn default_entries() -> Vec<Entry> {
    DEFAULT_NAMES.iter().copied().map(Entry::new).collect()
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    /// Home screen form; lives for the whole session so it survives a trip to the result view
    pub form: EntryForm,
    /// Present only while the result view is showing
    pub result: Option<ResultScreen>,
}

impl AppState {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            current_view: View::Home,
            form: EntryForm::new(entries),
            result: None,
        }
    }
}
