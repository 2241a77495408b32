//! Raw session documents as produced by the loader.

use serde_json::Value;

/// One parsed session file: its file name plus the decoded JSON document.
///
/// Immutable once created. The document is kept whole so the event log can
/// show fields the summary never reads.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSession {
    file: String,
    data: Value,
}

impl RawSession {
    /// Create a session from a file name and its decoded document.
    pub fn new(file: impl Into<String>, data: Value) -> Self {
        Self {
            file: file.into(),
            data,
        }
    }

    /// File name the session was read from (no directory component).
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The decoded document.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// The `events` array, if the document has one.
    ///
    /// Returns `None` when `events` is missing or not an array.
    pub fn events(&self) -> Option<&[Value]> {
        self.data
            .get("events")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}
