//! Tests for the event loop shell: key dispatch, mouse, and loading.

use super::*;
use crate::model::ChartKind;
use crate::state::{DirInputState, STATUS_LOAD_FIRST};
use crate::view::constants::TABLE_CHROME_TOP;
use crate::view::test_support::{buffer_to_string, loaded_state, sample_session};
use ratatui::backend::TestBackend;
use std::fs;
use std::time::Instant;
use tempfile::TempDir;

// ===== Helpers =====

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_with(state: AppState) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    TuiApp::new_for_test(terminal, state)
}

fn loaded_app(count: usize) -> TuiApp<TestBackend> {
    let sessions = (0..count)
        .map(|i| sample_session(&format!("s{i}.json"), i as f64, i))
        .collect();
    app_with(loaded_state(sessions))
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn wheel(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn screen(app: &TuiApp<TestBackend>) -> String {
    buffer_to_string(app.terminal().backend().buffer())
}

fn session_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

// ===== Errors =====

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

// ===== Quit =====

#[test]
fn handle_key_q_returns_true() {
    let mut app = app_with(AppState::new());
    assert!(app.handle_key_test(key(KeyCode::Char('q'))));
}

#[test]
fn handle_key_ctrl_c_returns_true_even_in_prompt() {
    let mut app = app_with(AppState::new());
    app.handle_key_test(key(KeyCode::Char('o')));
    assert!(app.handle_key_test(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}

#[test]
fn handle_key_unbound_returns_false() {
    let mut app = app_with(AppState::new());
    assert!(!app.handle_key_test(key(KeyCode::Char('z'))));
}

#[test]
fn key_release_is_ignored() {
    let mut app = app_with(AppState::new());
    let mut release = key(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;
    assert!(!app.handle_key_test(release));
}

// ===== Table and event log =====

#[test]
fn enter_selects_cursor_row_and_shows_its_events() {
    let mut app = loaded_app(3);

    app.handle_key_test(key(KeyCode::Char('j')));
    app.handle_key_test(key(KeyCode::Char('j')));
    app.handle_key_test(key(KeyCode::Enter));
    app.render_test().unwrap();

    assert_eq!(app.app_state().selection(), Some(2));
    let text = screen(&app);
    assert!(text.contains("Event Log: s2.json"));
    assert!(text.contains("12:00:01 | scan"));
}

#[test]
fn moving_the_cursor_does_not_select() {
    let mut app = loaded_app(3);
    app.handle_key_test(key(KeyCode::Down));
    assert_eq!(app.app_state().table_cursor.cursor(), 1);
    assert_eq!(app.app_state().selection(), None);
}

#[test]
fn enter_in_event_log_does_not_change_selection() {
    let mut app = loaded_app(2);
    app.handle_key_test(key(KeyCode::Tab));
    app.handle_key_test(key(KeyCode::Enter));
    assert_eq!(app.app_state().selection(), None);
}

#[test]
fn click_on_table_row_selects_it() {
    let mut app = loaded_app(4);
    app.render_test().unwrap();
    let table = app.last_layout.unwrap().table;

    app.handle_mouse_test(click(table.x + 3, table.y + TABLE_CHROME_TOP + 1));

    assert_eq!(app.app_state().selection(), Some(1));
    assert_eq!(app.app_state().table_cursor.cursor(), 1);
}

#[test]
fn click_on_header_row_selects_nothing() {
    let mut app = loaded_app(4);
    app.render_test().unwrap();
    let table = app.last_layout.unwrap().table;

    app.handle_mouse_test(click(table.x + 3, table.y + 1));

    assert_eq!(app.app_state().selection(), None);
}

#[test]
fn click_before_first_render_is_ignored() {
    let mut app = loaded_app(2);
    app.handle_mouse_test(click(3, 3));
    assert_eq!(app.app_state().selection(), None);
}

#[test]
fn wheel_over_event_log_scrolls_log_without_moving_focus() {
    let mut app = loaded_app(2);
    app.handle_key_test(key(KeyCode::Char('j')));
    app.handle_key_test(key(KeyCode::Enter));
    app.render_test().unwrap();
    let log = app.last_layout.unwrap().event_log;

    app.handle_mouse_test(wheel(MouseEventKind::ScrollDown, log.x + 2, log.y + 2));

    // Session s1 has one event, so the log cannot scroll past line 0
    assert_eq!(app.app_state().event_log_scroll, 0);
    assert_eq!(app.app_state().focus, FocusPane::Table);
}

#[test]
fn wheel_over_table_moves_cursor() {
    let mut app = loaded_app(10);
    app.render_test().unwrap();
    let table = app.last_layout.unwrap().table;

    app.handle_mouse_test(wheel(MouseEventKind::ScrollDown, table.x + 2, table.y + 3));

    assert_eq!(app.app_state().table_cursor.cursor(), WHEEL_STEP);
}

#[test]
fn page_down_moves_by_half_the_visible_rows() {
    let mut app = loaded_app(30);
    app.render_test().unwrap();
    let expected = SummaryTable::visible_rows(app.last_layout.unwrap().table) / 2;

    app.handle_key_test(key(KeyCode::PageDown));

    assert_eq!(app.app_state().table_cursor.cursor(), expected.max(1));
}

#[test]
fn cursor_stays_visible_after_render() {
    let mut app = loaded_app(30);
    app.render_test().unwrap();
    app.handle_key_test(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
    app.render_test().unwrap();

    let cursor = app.app_state().table_cursor;
    let visible = SummaryTable::visible_rows(app.last_layout.unwrap().table);
    assert_eq!(cursor.cursor(), 29);
    assert!(cursor.offset() <= 29 && 29 < cursor.offset() + visible);
    assert!(screen(&app).contains("s29.json"));
}

// ===== Charts =====

#[test]
fn draw_without_sessions_sets_status() {
    let mut app = app_with(AppState::new());
    app.handle_key_test(key(KeyCode::Char('d')));
    app.render_test().unwrap();

    assert_eq!(app.app_state().drawn_chart(), None);
    assert!(screen(&app).contains(STATUS_LOAD_FIRST));
}

#[test]
fn bracket_then_d_draws_next_chart_kind() {
    let mut app = loaded_app(2);
    app.handle_key_test(key(KeyCode::Char(']')));
    app.handle_key_test(key(KeyCode::Char('d')));
    app.render_test().unwrap();

    assert_eq!(app.app_state().drawn_chart(), Some(ChartKind::Tph));
    assert!(screen(&app).contains("TPH per session"));
}

#[test]
fn prev_chart_wraps_to_pie() {
    let mut app = loaded_app(2);
    app.handle_key_test(key(KeyCode::Char('[')));
    app.handle_key_test(key(KeyCode::Char('d')));
    app.render_test().unwrap();

    assert_eq!(app.app_state().drawn_chart(), Some(ChartKind::Pie));
    assert!(screen(&app).contains("Asteroid content summary"));
}

// ===== Help =====

#[test]
fn help_overlay_blocks_other_actions() {
    let mut app = loaded_app(2);
    app.handle_key_test(key(KeyCode::Char('?')));
    assert!(app.app_state().help_visible);

    app.handle_key_test(key(KeyCode::Char('d')));
    assert_eq!(app.app_state().drawn_chart(), None);

    app.handle_key_test(key(KeyCode::Char('j')));
    assert_eq!(app.app_state().help_scroll_offset, 1);
    assert_eq!(app.app_state().table_cursor.cursor(), 0);

    app.handle_key_test(key(KeyCode::Esc));
    assert!(!app.app_state().help_visible);
}

// ===== Directory prompt and loading =====

#[test]
fn prompt_typing_and_escape() {
    let mut app = app_with(AppState::new());
    app.handle_key_test(key(KeyCode::Char('o')));
    assert_eq!(app.app_state().focus, FocusPane::DirectoryInput);

    // Bound keys are plain text while typing
    app.handle_key_test(key(KeyCode::Char('q')));
    app.handle_key_test(key(KeyCode::Char('d')));
    app.handle_key_test(key(KeyCode::Backspace));
    assert_eq!(
        app.app_state().dir_input,
        DirInputState::Typing {
            input: "q".to_string(),
            cursor: 1
        }
    );

    app.handle_key_test(key(KeyCode::Esc));
    assert!(!app.app_state().dir_input.is_active());
    assert_eq!(app.app_state().focus, FocusPane::Table);
    assert!(!app.app_state().is_loading());
}

#[test]
fn prompt_enter_loads_directory() {
    let dir = session_dir(&[
        ("a.json", r#"{"meta": {"overall_tph": {"tons": 5}}}"#),
        ("broken.json", "{ nope"),
    ]);
    let mut app = app_with(AppState::new());

    app.handle_key_test(key(KeyCode::Char('o')));
    for ch in dir.path().to_string_lossy().chars() {
        app.handle_key_test(key(KeyCode::Char(ch)));
    }
    app.handle_key_test(key(KeyCode::Enter));

    assert!(app.app_state().is_loading());
    assert!(app.wait_for_load());
    assert_eq!(app.app_state().summaries().len(), 1);
    assert_eq!(app.app_state().summaries()[0].tons, 5.0);
    assert_eq!(app.app_state().directory(), Some(dir.path()));
}

#[test]
fn newest_load_wins() {
    let first = session_dir(&[("one.json", "{}")]);
    let second = session_dir(&[("two.json", "{}"), ("three.json", "{}")]);
    let mut app = app_with(AppState::new());

    app.load_directory(first.path().to_path_buf());
    app.load_directory(second.path().to_path_buf());
    app.wait_for_load();
    app.wait_for_load();

    assert_eq!(app.app_state().summaries().len(), 2);
    assert_eq!(app.app_state().directory(), Some(second.path()));
    assert!(!app.app_state().is_loading());
}

#[test]
fn reload_requests_current_directory_again() {
    let dir = session_dir(&[("a.json", "{}")]);
    let mut app = app_with(AppState::new());
    app.load_directory(dir.path().to_path_buf());
    app.wait_for_load();

    fs::write(dir.path().join("b.json"), "{}").unwrap();
    app.handle_key_test(key(KeyCode::Char('r')));
    assert!(app.app_state().is_loading());
    app.wait_for_load();

    assert_eq!(app.app_state().summaries().len(), 2);
}

#[test]
fn steady_input_still_applies_finished_loads() {
    let dir = session_dir(&[("a.json", "{}")]);
    let mut app = app_with(AppState::new());
    app.load_directory(dir.path().to_path_buf());

    let moved = Event::Mouse(wheel(MouseEventKind::Moved, 0, 0));
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.app_state().is_loading() && Instant::now() < deadline {
        assert!(!app.handle_event_test(moved.clone()));
        std::thread::sleep(Duration::from_millis(5));
    }

    assert!(!app.app_state().is_loading());
    assert_eq!(app.app_state().summaries().len(), 1);
}

#[test]
fn quit_key_through_event_returns_true() {
    let mut app = app_with(AppState::new());
    assert!(app.handle_event_test(Event::Key(key(KeyCode::Char('q')))));
}

#[test]
fn reload_without_directory_is_noop() {
    let mut app = app_with(AppState::new());
    app.handle_key_test(key(KeyCode::Char('r')));
    assert!(!app.app_state().is_loading());
}
