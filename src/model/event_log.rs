//! Plain-text rendering of a session's raw event list.

use crate::model::fields::{is_truthy, text_or_empty};
use crate::model::RawSession;
use serde_json::Value;

/// Shown when no session is selected or the session has no events.
pub const NO_EVENTS_MESSAGE: &str = "No events found.";

/// Format one event as `timestamp | type | details`.
///
/// `details` is compact JSON; a missing or falsy `details` prints as `{}`.
pub fn format_event(event: &Value) -> String {
    let timestamp = text_or_empty(event.get("timestamp"));
    let kind = text_or_empty(event.get("type"));
    let details = match event.get("details") {
        Some(details) if is_truthy(details) => details.to_string(),
        _ => "{}".to_string(),
    };
    format!("{timestamp} | {kind} | {details}")
}

/// Lines for the event log pane, in source order.
///
/// Falls back to [`NO_EVENTS_MESSAGE`] when nothing is selected or the
/// selected session has no events.
pub fn event_log_lines(session: Option<&RawSession>) -> Vec<String> {
    match session.and_then(RawSession::events) {
        Some(events) if !events.is_empty() => events.iter().map(format_event).collect(),
        _ => vec![NO_EVENTS_MESSAGE.to_string()],
    }
}
