//! TUI rendering and terminal management (impure shell)

pub mod chart;
pub mod constants;
mod dir_input;
mod event_log;
mod help;
pub mod layout;
mod stats;
pub mod styles;
pub mod table;
#[cfg(test)]
pub(crate) mod test_support;

pub use chart::TerminalChart;
pub use dir_input::DirInput;
pub use event_log::EventLog;
pub use help::render_help_overlay;
pub use layout::{render_layout, DashboardLayout};
pub use stats::AggregatePanel;
pub use styles::{ColorConfig, DashboardStyles};
pub use table::SummaryTable;

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::source::{LoadOutcome, LoadWorker};
use crate::state::{dir_input as prompt, AppState, FocusPane};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Tick interval for polling finished loads while idle.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Lines moved per mouse wheel notch.
const WHEEL_STEP: usize = 3;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    loader: LoadWorker,
    key_bindings: KeyBindings,
    styles: DashboardStyles,
    /// Last rendered layout (for mouse hit-testing)
    last_layout: Option<DashboardLayout>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(app_state: AppState, styles: DashboardStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            styles,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Input is handled as it arrives;
    /// between inputs the loop wakes every tick to pick up finished loads.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                if self.handle_event(event::read()?) {
                    return Ok(());
                }
                self.draw()?;
            } else if self.poll_loads() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: DashboardStyles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            loader: LoadWorker::new(),
            key_bindings,
            styles,
            last_layout: None,
        }
    }

    /// Start loading `directory` in the background.
    ///
    /// The directory readout updates at once; data follows when the load
    /// finishes. A newer request supersedes this one.
    pub fn load_directory(&mut self, directory: PathBuf) {
        let generation = self.loader.request(directory.clone());
        self.app_state.begin_load(directory, generation);
    }

    /// Apply any finished loads. Returns true if state changed.
    fn poll_loads(&mut self) -> bool {
        self.apply_outcomes(self.loader.poll())
    }

    fn apply_outcomes(&mut self, outcomes: Vec<LoadOutcome>) -> bool {
        outcomes
            .into_iter()
            .fold(false, |changed, outcome| self.app_state.apply_load(outcome) || changed)
    }

    /// Handle one terminal event, then pick up any finished loads.
    ///
    /// Loads are polled after every event so steady input cannot starve
    /// them. Returns true if app should quit.
    fn handle_event(&mut self, event: Event) -> bool {
        let quit = match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                false
            }
            _ => false,
        };
        self.poll_loads();
        quit
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Ctrl+C always quits, even while typing a path
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.dir_input.is_active() {
            self.handle_prompt_key(key);
            return false;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.toggle_help();
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Help overlay swallows everything except scrolling, help and quit
        if self.app_state.help_visible {
            match action {
                KeyAction::Quit => return true,
                KeyAction::Help => self.app_state.toggle_help(),
                KeyAction::MoveUp | KeyAction::PageUp => self.scroll_help_up(),
                KeyAction::MoveDown | KeyAction::PageDown => self.scroll_help_down(),
                _ => {}
            }
            return false;
        }

        self.dispatch(action)
    }

    /// Apply a bound action. Returns true for quit.
    fn dispatch(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::MoveUp => self.app_state.move_up(1),
            KeyAction::MoveDown => self.app_state.move_down(1),
            KeyAction::PageUp => {
                let page = self.page_size();
                self.app_state.move_up(page);
            }
            KeyAction::PageDown => {
                let page = self.page_size();
                self.app_state.move_down(page);
            }
            KeyAction::MoveToTop => self.app_state.move_to_top(),
            KeyAction::MoveToBottom => self.app_state.move_to_bottom(),
            KeyAction::SelectRow => {
                if self.app_state.focus == FocusPane::Table {
                    self.app_state.select_cursor_row();
                }
            }
            KeyAction::CycleFocus => self.app_state.cycle_focus(),
            KeyAction::NextChart => self.app_state.next_chart(),
            KeyAction::PrevChart => self.app_state.prev_chart(),
            KeyAction::DrawChart => self.app_state.draw_chart(),
            KeyAction::OpenDirectory => self.app_state.open_dir_input(),
            KeyAction::Reload => match self.app_state.directory() {
                Some(dir) => {
                    let dir = dir.to_path_buf();
                    info!(directory = ?dir, "Reloading");
                    self.load_directory(dir);
                }
                None => debug!("Reload with no directory chosen"),
            },
        }
        false
    }

    /// Keys while the directory prompt is open.
    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let state = std::mem::take(&mut self.app_state.dir_input);
        self.app_state.dir_input = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                prompt::handle_char_input(state, ch)
            }
            KeyCode::Backspace => prompt::handle_backspace(state),
            KeyCode::Left => prompt::handle_cursor_left(state),
            KeyCode::Right => prompt::handle_cursor_right(state),
            KeyCode::Enter => {
                self.app_state.dir_input = state;
                if let Some(directory) = self.app_state.submit_dir_input() {
                    self.load_directory(directory);
                }
                return;
            }
            KeyCode::Esc => {
                self.app_state.dir_input = state;
                self.app_state.cancel_dir_input();
                return;
            }
            _ => state,
        };
    }

    /// Handle a single mouse event
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.help_visible {
            match mouse.kind {
                MouseEventKind::ScrollUp => self.scroll_help_up(),
                MouseEventKind::ScrollDown => self.scroll_help_down(),
                _ => {}
            }
            return;
        }

        let Some(layout) = self.last_layout else {
            return;
        };

        match mouse.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let previous = self.app_state.focus;
                if contains(layout.event_log, mouse.column, mouse.row) {
                    self.app_state.focus = FocusPane::EventLog;
                } else if contains(layout.table, mouse.column, mouse.row) {
                    self.app_state.focus = FocusPane::Table;
                }
                if mouse.kind == MouseEventKind::ScrollUp {
                    self.app_state.move_up(WHEEL_STEP);
                } else {
                    self.app_state.move_down(WHEEL_STEP);
                }
                self.app_state.focus = previous;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.app_state.dir_input.is_active() {
                    return;
                }
                if let Some(index) = SummaryTable::row_at(
                    layout.table,
                    self.app_state.table_cursor.offset(),
                    self.app_state.summaries().len(),
                    mouse.column,
                    mouse.row,
                ) {
                    debug!(index, "Row clicked");
                    self.app_state.select_row(index);
                    self.app_state.focus = FocusPane::Table;
                }
            }
            _ => {}
        }
    }

    fn scroll_help_up(&mut self) {
        self.app_state.help_scroll_offset = self.app_state.help_scroll_offset.saturating_sub(1);
    }

    fn scroll_help_down(&mut self) {
        let max = help::help_line_count().saturating_sub(1);
        self.app_state.help_scroll_offset =
            self.app_state.help_scroll_offset.saturating_add(1).min(max);
    }

    /// Half the visible table height, at least one row.
    fn page_size(&self) -> usize {
        self.last_layout
            .map(|layout| SummaryTable::visible_rows(layout.table) / 2)
            .unwrap_or(0)
            .max(1)
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let layout = DashboardLayout::compute(area, &self.app_state);

        // Keep the cursor row on screen before the table is drawn
        self.app_state
            .table_cursor
            .adjust_scroll(SummaryTable::visible_rows(layout.table));
        self.last_layout = Some(layout);

        let state = &self.app_state;
        let styles = self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, state, styles);
        })?;

        Ok(())
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(ratatui::layout::Position::new(column, row))
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            DashboardStyles::default(),
        )
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_event_test(&mut self, event: Event) -> bool {
        self.handle_event(event)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Block until the next load finishes and apply it.
    pub(crate) fn wait_for_load(&mut self) -> bool {
        match self.loader.wait(Duration::from_secs(5)) {
            Some(outcome) => self.apply_outcomes(vec![outcome]),
            None => false,
        }
    }
}

// ===== Entry point =====

/// Startup options carried from the CLI and config into the TUI.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Directory loaded on startup.
    pub directory: Option<PathBuf>,
    /// Chart kind name drawn once the first load finishes.
    pub chart: Option<String>,
    /// Color output configuration.
    pub color: Option<ColorConfig>,
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and restores the terminal on
/// exit, including when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(args: CliArgs) -> Result<(), TuiError> {
    let mut state = AppState::new();
    if let Some(chart) = args.chart {
        state = state.with_startup_chart(chart);
    }
    let styles = DashboardStyles::new(args.color.unwrap_or_else(ColorConfig::enabled));

    let mut app = TuiApp::new(state, styles)?;
    if let Some(directory) = args.directory {
        app.load_directory(directory);
    }

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
