//! Entry form state: the committed list plus the pending input

use super::field::FormField;
use crate::router::{Navigator, Route};
use crate::state::{default_entries, Entry};
use crate::transfer;

/// Focus targets on the home form, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Input,
    Submit,
    Finish,
}

impl FormFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Input => Self::Submit,
            Self::Submit => Self::Finish,
            Self::Finish => Self::Input,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Input => Self::Finish,
            Self::Submit => Self::Input,
            Self::Finish => Self::Submit,
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<'a> {
    /// The trimmed input was appended; carries the updated list
    Committed(&'a [Entry]),
    /// The input was blank; the error flag is now latched
    Rejected,
}

/// Append-only list of entries with one pending input field.
///
/// The only validation rule is non-empty-after-trim. `show_error` is latched:
/// it is set by a rejected submit and cleared either by the next successful
/// submit or by an input update whose trimmed value is non-empty.
#[derive(Debug, Clone)]
pub struct EntryForm {
    entries: Vec<Entry>,
    input: FormField,
    show_error: bool,
    pub focus: FormFocus,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new(default_entries())
    }
}

impl EntryForm {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            input: FormField::text("Name"),
            show_error: false,
            focus: FormFocus::default(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn input(&self) -> &FormField {
        &self.input
    }

    /// Raw pending text, untrimmed
    pub fn pending(&self) -> &str {
        self.input.as_text()
    }

    pub fn show_error(&self) -> bool {
        self.show_error
    }

    pub fn is_submittable(&self) -> bool {
        !self.input.is_blank()
    }

    /// Replace the pending text. Clears a latched error once the text is non-blank.
    pub fn update_input(&mut self, raw: impl Into<String>) {
        self.input.set_text(raw);
        if self.show_error && !self.input.is_blank() {
            self.show_error = false;
        }
    }

    pub fn push_char(&mut self, c: char) {
        let mut raw = self.input.as_text().to_string();
        raw.push(c);
        self.update_input(raw);
    }

    pub fn pop_char(&mut self) {
        let mut raw = self.input.as_text().to_string();
        raw.pop();
        self.update_input(raw);
    }

    pub fn clear_input(&mut self) {
        self.update_input(String::new());
    }

    /// Commit the trimmed pending text, or latch the error flag if it is blank
    pub fn submit(&mut self) -> SubmitOutcome<'_> {
        let trimmed = self.input.trimmed();
        if trimmed.is_empty() {
            self.show_error = true;
            return SubmitOutcome::Rejected;
        }

        self.entries.push(Entry::new(trimmed));
        self.input.clear();
        self.show_error = false;
        SubmitOutcome::Committed(&self.entries)
    }

    /// Encode a snapshot of the list and hand it to the result route
    pub fn finish<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        let list_data = transfer::encode(&self.entries);
        tracing::debug!(
            entries = self.entries.len(),
            encoded_len = list_data.len(),
            "finishing entry form"
        );
        navigator.navigate(Route::Result { list_data });
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
}
