//! Form domain layer
//!
//! Type-safe state for the home screen's entry form.

mod field;
mod form_state;

pub use form_state::{EntryForm, FormFocus, SubmitOutcome};
