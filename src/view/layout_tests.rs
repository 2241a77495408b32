//! Tests for dashboard layout rendering.

use super::*;
use crate::view::test_support::{buffer_to_string, loaded_state, sample_session};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, DashboardStyles::default()))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn two_sessions() -> AppState {
    loaded_state(vec![
        sample_session("alpha.json", 10.0, 2),
        sample_session("beta.json", 20.0, 0),
    ])
}

// ===== DashboardLayout =====

#[test]
fn layout_regions_stack_without_overlap() {
    let layout = DashboardLayout::compute(Rect::new(0, 0, 120, 40), &AppState::new());

    assert_eq!(layout.header.y, 0);
    assert_eq!(layout.table.y, 1);
    assert_eq!(layout.aggregate.y, layout.table.bottom());
    assert_eq!(layout.selector.y, layout.aggregate.bottom());
    assert_eq!(layout.canvas.y, layout.selector.bottom());
    assert_eq!(layout.event_log.y, layout.selector.y);
    assert!(layout.event_log.x >= layout.canvas.right());
    assert_eq!(layout.status.y, 39);
    assert_eq!(layout.dir_input, None);
}

#[test]
fn layout_reserves_prompt_row_only_while_typing() {
    let mut state = AppState::new();
    state.open_dir_input();

    let layout = DashboardLayout::compute(Rect::new(0, 0, 120, 40), &state);

    let prompt = layout.dir_input.expect("prompt area while typing");
    assert_eq!(prompt.height, DIR_INPUT_HEIGHT);
    assert_eq!(prompt.bottom(), layout.status.y);
}

// ===== Rendering =====

#[test]
fn empty_state_shows_no_directory_and_hints() {
    let text = render(&AppState::new(), 120, 30);

    assert!(text.contains("Directory: (none)"));
    assert!(text.contains("No sessions loaded"));
    assert!(text.contains(CANVAS_HINT));
    assert!(text.contains("No events found."));
    assert!(text.contains("q: quit"));
}

#[test]
fn loaded_state_shows_rows_and_aggregates() {
    let text = render(&two_sessions(), 140, 34);

    assert!(text.contains("Directory: /sessions | Sessions: 2"));
    assert!(text.contains("alpha.json"));
    assert!(text.contains("beta.json"));
    assert!(text.contains("Total Tons: 30"));
    assert!(text.contains("Avg Tons/Session: 15.00"));
}

#[test]
fn selected_session_events_fill_the_log() {
    let mut state = two_sessions();
    state.select_row(0);

    let text = render(&state, 140, 34);

    assert!(text.contains("Event Log: alpha.json"));
    assert!(text.contains(r#"12:00:00 | scan | {"n":0}"#));
    assert!(text.contains(r#"12:00:01 | scan | {"n":1}"#));
}

#[test]
fn drawn_chart_replaces_canvas_hint() {
    let mut state = two_sessions();
    state.draw_chart();

    let text = render(&state, 140, 40);

    assert!(text.contains("Tons mined per session"));
    assert!(!text.contains(CANVAS_HINT));
}

#[test]
fn header_shows_loading_while_request_pending() {
    let mut state = AppState::new();
    state.begin_load(std::path::PathBuf::from("/incoming"), 3);

    let text = render(&state, 120, 30);

    assert!(text.contains("Directory: /incoming"));
    assert!(text.contains("[loading...]"));
}

#[test]
fn status_message_replaces_hints() {
    let mut state = AppState::new();
    state.draw_chart();

    let text = render(&state, 120, 30);

    assert!(text.contains("Load sessions first."));
    assert!(!text.contains("q: quit"));
}

#[test]
fn help_overlay_draws_on_top() {
    let mut state = two_sessions();
    state.toggle_help();

    let text = render(&state, 120, 40);

    assert!(text.contains("Keyboard Shortcuts"));
}

#[test]
fn keyboard_hints_depend_on_focus() {
    assert!(keyboard_hints(FocusPane::Table).contains("Enter: select"));
    assert!(keyboard_hints(FocusPane::EventLog).contains("scroll log"));
    assert!(keyboard_hints(FocusPane::DirectoryInput).contains("Esc: cancel"));
}
