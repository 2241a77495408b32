//! Shared helpers for rendering tests.

use crate::model::RawSession;
use crate::source::LoadOutcome;
use crate::state::AppState;
use ratatui::buffer::Buffer;
use serde_json::json;
use std::path::PathBuf;

/// Render a buffer as text, one line per row, trailing spaces trimmed.
///
/// Blank rows are kept so row indices match buffer coordinates.
pub(crate) fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// A session with the given tons and `events` scan events.
pub(crate) fn sample_session(file: &str, tons: f64, events: usize) -> RawSession {
    let events: Vec<_> = (0..events)
        .map(|i| json!({"timestamp": format!("12:00:{i:02}"), "type": "scan", "details": {"n": i}}))
        .collect();
    RawSession::new(
        file,
        json!({
            "meta": {
                "start_time": "2024-05-01 12:00",
                "end_time": "2024-05-01 13:00",
                "duration_seconds": 3600,
                "overall_tph": {"tons": tons, "tons_per_hour": tons},
                "commander": "CMDR Vega",
                "content_summary": {"High": 2, "Medium": 1, "Low": 1}
            },
            "events": events
        }),
    )
}

/// State with `sessions` already applied from `/sessions`.
pub(crate) fn loaded_state(sessions: Vec<RawSession>) -> AppState {
    let mut state = AppState::new();
    state.begin_load(PathBuf::from("/sessions"), 1);
    state.apply_load(LoadOutcome {
        generation: 1,
        directory: PathBuf::from("/sessions"),
        sessions,
    });
    state
}
