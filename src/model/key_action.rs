//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Navigation
    /// Move the table cursor or scroll the event log up one line. Default: k/↑
    MoveUp,
    /// Move the table cursor or scroll the event log down one line. Default: j/↓
    MoveDown,
    /// Move or scroll up by half a page. Default: Ctrl+u/Page Up
    PageUp,
    /// Move or scroll down by half a page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first row or top of the log. Default: g/Home
    MoveToTop,
    /// Jump to the last row or bottom of the log. Default: G/End
    MoveToBottom,

    // Selection
    /// Select the row under the table cursor and show its event log. Default: Enter
    SelectRow,
    /// Cycle focus between the table and the event log. Default: Tab
    CycleFocus,

    // Charts
    /// Choose the next chart kind in the selector. Default: ]
    NextChart,
    /// Choose the previous chart kind in the selector. Default: [
    PrevChart,
    /// Draw the chosen chart kind. Default: d
    DrawChart,

    // Directory
    /// Open the directory prompt. Default: o
    OpenDirectory,
    /// Reload the current directory. Default: r
    Reload,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
