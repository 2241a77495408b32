//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod dir_input;
pub mod table_cursor;

// Re-export for convenience
pub use app_state::{AppState, FocusPane, STATUS_LOAD_FIRST, STATUS_NO_SESSIONS};
pub use dir_input::DirInputState;
pub use table_cursor::TableCursor;
