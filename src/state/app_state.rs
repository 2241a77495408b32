//! Application state and transitions.
//!
//! AppState is the single owner of everything the dashboard shows: the loaded
//! sessions, their summaries and aggregate, the selection, chart state and
//! prompt state. Renderers borrow it; only its methods mutate it.

use crate::model::{
    aggregate, event_log_lines, summarize_all, AggregateStats, ChartKind, RawSession,
    SessionSummary,
};
use crate::source::LoadOutcome;
use crate::state::dir_input::{self, DirInputState};
use crate::state::TableCursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Status shown when drawing a chart with nothing loaded.
pub const STATUS_LOAD_FIRST: &str = "Load sessions first.";

/// Status shown when a load finds no session files.
pub const STATUS_NO_SESSIONS: &str = "No JSON session files found.";

// ===== FocusPane =====

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// The session summary table.
    #[default]
    Table,
    /// The event log of the selected session.
    EventLog,
    /// The directory prompt.
    DirectoryInput,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # Load lifecycle
///
/// `begin_load` records the directory and the generation of the request;
/// `apply_load` accepts only the outcome with that generation and replaces the
/// loaded data wholesale. Outcomes of superseded requests are dropped, so the
/// most recent request always wins.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    directory: Option<PathBuf>,
    sessions: Vec<RawSession>,
    summaries: Vec<SessionSummary>,
    aggregate: Option<AggregateStats>,
    selection: Option<usize>,
    pending_load: Option<u64>,
    drawn_chart: Option<ChartKind>,
    startup_chart: Option<String>,
    status: Option<String>,

    /// Which pane has keyboard focus.
    pub focus: FocusPane,

    /// Keyboard cursor over the table rows.
    pub table_cursor: TableCursor,

    /// Chart kind chosen in the selector (drawn only on request).
    pub chart_selector: ChartKind,

    /// First visible line of the event log pane.
    pub event_log_scroll: u16,

    /// Directory prompt state.
    pub dir_input: DirInputState,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// First visible line of the help overlay.
    pub help_scroll_offset: u16,
}

impl AppState {
    /// Create an empty state with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the chart named `name` once the first non-empty load is applied.
    ///
    /// The name is resolved at that point; an unknown name draws nothing.
    pub fn with_startup_chart(mut self, name: impl Into<String>) -> Self {
        self.startup_chart = Some(name.into());
        self
    }

    // ===== Accessors =====

    /// Directory currently shown (or being loaded).
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Loaded sessions in loader order.
    pub fn sessions(&self) -> &[RawSession] {
        &self.sessions
    }

    /// One summary per loaded session, same order.
    pub fn summaries(&self) -> &[SessionSummary] {
        &self.summaries
    }

    /// Aggregate over the summaries, `None` when nothing is loaded.
    pub fn aggregate(&self) -> Option<&AggregateStats> {
        self.aggregate.as_ref()
    }

    /// Index of the selected session.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// The selected session, if any.
    pub fn selected_session(&self) -> Option<&RawSession> {
        self.selection.and_then(|idx| self.sessions.get(idx))
    }

    /// The chart currently on the canvas.
    pub fn drawn_chart(&self) -> Option<ChartKind> {
        self.drawn_chart
    }

    /// Transient status message.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Whether a load request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Lines for the event log pane.
    pub fn event_log_lines(&self) -> Vec<String> {
        event_log_lines(self.selected_session())
    }

    // ===== Loading =====

    /// Record that `directory` is being loaded under `generation`.
    ///
    /// The directory readout updates immediately; data is replaced when the
    /// matching outcome arrives.
    pub fn begin_load(&mut self, directory: PathBuf, generation: u64) {
        info!(directory = ?directory, generation, "Loading session directory");
        self.directory = Some(directory);
        self.pending_load = Some(generation);
        self.status = None;
    }

    /// Apply a finished load.
    ///
    /// Returns `false` (and changes nothing) when the outcome belongs to a
    /// superseded request.
    pub fn apply_load(&mut self, outcome: LoadOutcome) -> bool {
        if self.pending_load != Some(outcome.generation) {
            debug!(
                generation = outcome.generation,
                pending = ?self.pending_load,
                "Dropping stale load result"
            );
            return false;
        }

        info!(
            directory = ?outcome.directory,
            sessions = outcome.sessions.len(),
            "Applied session load"
        );

        self.pending_load = None;
        self.directory = Some(outcome.directory);
        self.summaries = summarize_all(&outcome.sessions);
        self.aggregate = aggregate(&self.summaries);
        self.sessions = outcome.sessions;
        self.selection = None;
        self.drawn_chart = None;
        self.table_cursor = TableCursor::new();
        self.event_log_scroll = 0;
        self.status = self
            .sessions
            .is_empty()
            .then(|| STATUS_NO_SESSIONS.to_string());

        // An empty load keeps its status; the startup chart waits for data
        if !self.sessions.is_empty() {
            if let Some(name) = self.startup_chart.take() {
                self.draw_chart_named(&name);
            }
        }

        true
    }

    // ===== Selection =====

    /// Select the session at `index` and show its event log.
    ///
    /// Returns `false` for an out-of-range index.
    pub fn select_row(&mut self, index: usize) -> bool {
        if index >= self.sessions.len() {
            return false;
        }
        self.selection = Some(index);
        self.table_cursor.set(index);
        self.event_log_scroll = 0;
        true
    }

    /// Select the row under the table cursor.
    pub fn select_cursor_row(&mut self) -> bool {
        self.select_row(self.table_cursor.cursor())
    }

    // ===== Charts =====

    /// Move the selector to the next chart kind.
    pub fn next_chart(&mut self) {
        self.chart_selector = self.chart_selector.next();
    }

    /// Move the selector to the previous chart kind.
    pub fn prev_chart(&mut self) {
        self.chart_selector = self.chart_selector.prev();
    }

    /// Draw the selected chart kind, replacing any chart already drawn.
    ///
    /// With nothing loaded this only sets a status message.
    pub fn draw_chart(&mut self) {
        if self.summaries.is_empty() {
            self.status = Some(STATUS_LOAD_FIRST.to_string());
            return;
        }
        self.drawn_chart = Some(self.chart_selector);
        self.status = None;
    }

    /// Draw a chart named by string; unknown names are ignored.
    pub fn draw_chart_named(&mut self, name: &str) {
        match ChartKind::parse(name) {
            Some(kind) => {
                self.chart_selector = kind;
                self.draw_chart();
            }
            None => debug!(name, "Ignoring unrecognized chart kind"),
        }
    }

    // ===== Help =====

    /// Show or hide the help overlay, starting at its top.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        self.help_scroll_offset = 0;
    }

    // ===== Focus and navigation =====

    /// Toggle focus between the table and the event log.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Table => FocusPane::EventLog,
            FocusPane::EventLog | FocusPane::DirectoryInput => FocusPane::Table,
        };
    }

    /// Move the table cursor or scroll the log up by `n`.
    pub fn move_up(&mut self, n: usize) {
        match self.focus {
            FocusPane::Table => self.table_cursor.up(n),
            FocusPane::EventLog => {
                self.event_log_scroll = self.event_log_scroll.saturating_sub(clamp_u16(n));
            }
            FocusPane::DirectoryInput => {}
        }
    }

    /// Move the table cursor or scroll the log down by `n`.
    pub fn move_down(&mut self, n: usize) {
        match self.focus {
            FocusPane::Table => self.table_cursor.down(n, self.summaries.len()),
            FocusPane::EventLog => {
                let max = self.max_event_log_scroll();
                self.event_log_scroll = self
                    .event_log_scroll
                    .saturating_add(clamp_u16(n))
                    .min(max);
            }
            FocusPane::DirectoryInput => {}
        }
    }

    /// Jump to the first row or top of the log.
    pub fn move_to_top(&mut self) {
        match self.focus {
            FocusPane::Table => self.table_cursor.first(),
            FocusPane::EventLog => self.event_log_scroll = 0,
            FocusPane::DirectoryInput => {}
        }
    }

    /// Jump to the last row or bottom of the log.
    pub fn move_to_bottom(&mut self) {
        match self.focus {
            FocusPane::Table => self.table_cursor.last(self.summaries.len()),
            FocusPane::EventLog => self.event_log_scroll = self.max_event_log_scroll(),
            FocusPane::DirectoryInput => {}
        }
    }

    fn max_event_log_scroll(&self) -> u16 {
        clamp_u16(self.event_log_lines().len().saturating_sub(1))
    }

    // ===== Directory prompt =====

    /// Open the directory prompt, pre-filled with the current directory.
    pub fn open_dir_input(&mut self) {
        let initial = self
            .directory
            .as_ref()
            .map(|d| d.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.dir_input = dir_input::activate(std::mem::take(&mut self.dir_input), &initial);
        self.focus = FocusPane::DirectoryInput;
    }

    /// Close the prompt and return the chosen directory, if any.
    pub fn submit_dir_input(&mut self) -> Option<PathBuf> {
        let (state, chosen) = dir_input::submit(std::mem::take(&mut self.dir_input));
        self.dir_input = state;
        self.focus = FocusPane::Table;
        chosen
    }

    /// Close the prompt without choosing.
    pub fn cancel_dir_input(&mut self) {
        self.dir_input = dir_input::cancel(std::mem::take(&mut self.dir_input));
        self.focus = FocusPane::Table;
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
