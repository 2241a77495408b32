//! Dashboard layout rendering.
//!
//! [`DashboardLayout::compute`] is pure: the event loop uses the same areas
//! for scroll adjustment and mouse hit-testing that [`render_layout`] draws
//! into.

use super::chart::TerminalChart;
use super::constants::{
    AGGREGATE_HEIGHT, CHART_SELECTOR_HEIGHT, CHART_WIDTH_PERCENT, DIR_INPUT_HEIGHT,
    HEADER_HEIGHT, STATUS_BAR_HEIGHT, TABLE_HEIGHT_PERCENT,
};
use super::dir_input::DirInput;
use super::event_log::EventLog;
use super::help::render_help_overlay;
use super::stats::AggregatePanel;
use super::styles::DashboardStyles;
use super::table::SummaryTable;
use crate::model::{draw_chart, ChartKind, RawSession};
use crate::state::{AppState, FocusPane};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CANVAS_HINT: &str = "Choose a chart with [ and ], then press d to draw it.";

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    /// Directory readout and load status.
    pub header: Rect,
    /// Session summary table.
    pub table: Rect,
    /// Aggregate stats.
    pub aggregate: Rect,
    /// Chart kind selector line.
    pub selector: Rect,
    /// Chart drawing area.
    pub canvas: Rect,
    /// Event log pane.
    pub event_log: Rect,
    /// Directory prompt, present only while it is open.
    pub dir_input: Option<Rect>,
    /// Status bar.
    pub status: Rect,
}

impl DashboardLayout {
    /// Split `area` for the given state.
    pub fn compute(area: Rect, state: &AppState) -> Self {
        let prompt_height = if state.dir_input.is_active() {
            DIR_INPUT_HEIGHT
        } else {
            0
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(prompt_height),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(TABLE_HEIGHT_PERCENT),
                Constraint::Length(AGGREGATE_HEIGHT),
                Constraint::Min(0),
            ])
            .split(rows[1]);

        let lower = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(CHART_WIDTH_PERCENT),
                Constraint::Percentage(100 - CHART_WIDTH_PERCENT),
            ])
            .split(body[2]);

        let chart = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CHART_SELECTOR_HEIGHT),
                Constraint::Min(0),
            ])
            .split(lower[0]);

        Self {
            header: rows[0],
            table: body[0],
            aggregate: body[1],
            selector: chart[0],
            canvas: chart[1],
            event_log: lower[1],
            dir_input: state.dir_input.is_active().then_some(rows[2]),
            status: rows[3],
        }
    }
}

/// Render the whole dashboard for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: DashboardStyles) {
    let layout = DashboardLayout::compute(frame.area(), state);

    render_header(frame, layout.header, state, styles);

    frame.render_widget(
        SummaryTable::new(state.summaries(), state.table_cursor)
            .selection(state.selection())
            .focused(state.focus == FocusPane::Table)
            .styles(styles),
        layout.table,
    );

    frame.render_widget(
        AggregatePanel::new(state.aggregate()).styles(styles),
        layout.aggregate,
    );

    render_chart_selector(frame, layout.selector, state.chart_selector, styles);
    render_canvas(frame, layout.canvas, state, styles);

    let lines = state.event_log_lines();
    frame.render_widget(
        EventLog::new(&lines)
            .file(state.selected_session().map(RawSession::file))
            .scroll(state.event_log_scroll)
            .focused(state.focus == FocusPane::EventLog)
            .styles(styles),
        layout.event_log,
    );

    if let Some(area) = layout.dir_input {
        frame.render_widget(DirInput::new(&state.dir_input).styles(styles), area);
    }

    render_status_bar(frame, layout.status, state, styles);

    if state.help_visible {
        render_help_overlay(frame, state.help_scroll_offset, styles);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: DashboardStyles) {
    let directory = state
        .directory()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());

    let mut spans = vec![Span::styled(
        format!(
            "minedash | Directory: {} | Sessions: {}",
            directory,
            state.sessions().len()
        ),
        styles.header(),
    )];
    if state.is_loading() {
        spans.push(Span::styled(" [loading...]", styles.loading()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_chart_selector(frame: &mut Frame, area: Rect, chosen: ChartKind, styles: DashboardStyles) {
    let mut spans = vec![Span::styled("Chart: ", styles.heading())];
    for (i, kind) in ChartKind::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let label = format!(" {} ", kind.as_str());
        if kind == chosen {
            spans.push(Span::styled(
                label,
                styles.heading().add_modifier(Modifier::REVERSED),
            ));
        } else {
            spans.push(Span::styled(label, styles.muted()));
        }
    }
    spans.push(Span::styled(
        format!("  {}", chosen.label()),
        styles.muted(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_canvas(frame: &mut Frame, area: Rect, state: &AppState, styles: DashboardStyles) {
    match state.drawn_chart() {
        Some(kind) => {
            let mut chart = TerminalChart::new(area, frame.buffer_mut(), styles);
            draw_chart(kind, state.summaries(), &mut chart);
        }
        None => {
            frame.render_widget(
                Paragraph::new(Line::from(CANVAS_HINT))
                    .style(styles.muted())
                    .block(
                        Block::default()
                            .title(" Chart ")
                            .borders(Borders::ALL)
                            .border_style(styles.border()),
                    ),
                area,
            );
        }
    }
}

/// Key hints for the status bar.
pub fn keyboard_hints(focus: FocusPane) -> &'static str {
    match focus {
        FocusPane::DirectoryInput => "Enter: load | Esc: cancel | ←/→: move cursor",
        FocusPane::Table => {
            "q: quit | ?: help | o: open | r: reload | Enter: select | [/]: chart | d: draw | Tab: log"
        }
        FocusPane::EventLog => {
            "q: quit | ?: help | j/k: scroll log | [/]: chart | d: draw | Tab: table"
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: DashboardStyles) {
    let paragraph = match state.status() {
        Some(message) => Paragraph::new(Line::from(message)).style(styles.status()),
        None => Paragraph::new(Line::from(keyboard_hints(state.focus))).style(styles.muted()),
    };
    frame.render_widget(paragraph, area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
