//! Transfer codec error types.

/// Errors that can occur while decoding a transfer string.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// A `%` was not followed by two hex digits
    #[error("Invalid percent escape at byte {offset}")]
    InvalidEscape { offset: usize },

    /// Percent-decoded bytes were not UTF-8
    #[error("Transfer string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Decoded text is not a JSON list of entries
    #[error("Malformed transfer payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
