//! JSON + percent-encoding for entry lists

use super::error::TransferError;
use crate::state::Entry;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except ASCII alphanumerics and the RFC 3986 unreserved marks is escaped
const TRANSFER_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Serialize `entries` to a JSON array and percent-encode it.
///
/// Total and deterministic: equal lists always produce the same string, and
/// the empty list encodes to `%5B%5D`.
pub fn encode(entries: &[Entry]) -> String {
    let json = serde_json::to_string(entries).unwrap_or_else(|err| {
        tracing::error!("failed to serialize entry list: {err}");
        String::from("[]")
    });
    utf8_percent_encode(&json, TRANSFER_SET).to_string()
}

/// Reverse [`encode`], reporting why a string could not be decoded.
///
/// `+` is read as a space so form-encoded producers are understood too;
/// [`encode`] never emits a bare `+`. A `%` not followed by two hex digits
/// is rejected rather than kept as literal text.
pub fn try_decode(list_data: &str) -> Result<Vec<Entry>, TransferError> {
    check_escapes(list_data)?;
    let plus_as_space = list_data.replace('+', " ");
    let json = percent_decode_str(&plus_as_space).decode_utf8()?;
    let entries: Option<Vec<Entry>> = serde_json::from_str(&json)?;
    Ok(entries.unwrap_or_default())
}

fn check_escapes(list_data: &str) -> Result<(), TransferError> {
    let bytes = list_data.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(TransferError::InvalidEscape { offset: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Reverse [`encode`]. Any malformed input yields an empty list.
pub fn decode(list_data: &str) -> Vec<Entry> {
    try_decode(list_data).unwrap_or_else(|err| {
        tracing::debug!(len = list_data.len(), "discarding transfer string: {err}");
        Vec::new()
    })
}
