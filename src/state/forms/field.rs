//! Form field value objects

/// A single-line text field with its label and current raw value.
///
/// The value is stored exactly as typed; trimming is computed on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    value: String,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
        }
    }

    /// Get the raw text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Get the value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// True when the value is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }
}
