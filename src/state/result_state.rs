//! State for the read-only result view

use super::app_state::Entry;
use crate::transfer;

/// An independent, immutable copy of a transferred list plus scroll position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultScreen {
    /// Transfer string the view was opened with
    list_data: String,
    entries: Vec<Entry>,
    selected_index: usize,
}

impl ResultScreen {
    /// Decode a transfer string. A malformed string opens an empty list.
    pub fn open(list_data: String) -> Self {
        let entries = transfer::decode(&list_data);
        Self {
            list_data,
            entries,
            selected_index: 0,
        }
    }

    pub fn list_data(&self) -> &str {
        &self.list_data
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.entries.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }
}
