//! Session summary table widget.
//!
//! One row per session, in load order. The row index is the session index,
//! so [`SummaryTable::row_at`] maps a click straight to
//! [`AppState::select_row`](crate::state::AppState::select_row).

use super::constants::TABLE_CHROME_TOP;
use super::styles::DashboardStyles;
use crate::model::SessionSummary;
use crate::state::TableCursor;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

/// Column headings, left to right.
pub const COLUMNS: [&str; 8] = [
    "File",
    "Start",
    "End",
    "Duration (s)",
    "Tons",
    "TPH",
    "Refined",
    "Commander",
];

const EMPTY_HINT: &str = "No sessions loaded. Press o to open a directory.";

/// Cell text for one summary row.
pub fn format_row(summary: &SessionSummary) -> [String; 8] {
    [
        summary.file.clone(),
        summary.start.clone(),
        summary.end.clone(),
        format!("{:.1}", summary.duration),
        summary.tons.to_string(),
        format!("{:.2}", summary.tph),
        summary.refined.to_string(),
        summary.commander.clone(),
    ]
}

/// Summary table widget.
pub struct SummaryTable<'a> {
    summaries: &'a [SessionSummary],
    cursor: TableCursor,
    selection: Option<usize>,
    focused: bool,
    styles: DashboardStyles,
}

impl<'a> SummaryTable<'a> {
    /// Create a table over `summaries`.
    pub fn new(summaries: &'a [SessionSummary], cursor: TableCursor) -> Self {
        Self {
            summaries,
            cursor,
            selection: None,
            focused: true,
            styles: DashboardStyles::default(),
        }
    }

    /// Highlight the selected session's row.
    pub fn selection(mut self, selection: Option<usize>) -> Self {
        self.selection = selection;
        self
    }

    /// Whether the table has keyboard focus (shows the cursor row).
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Use the given styles.
    pub fn styles(mut self, styles: DashboardStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Number of data rows that fit in `area`.
    pub fn visible_rows(area: Rect) -> usize {
        usize::from(area.height.saturating_sub(TABLE_CHROME_TOP + 1))
    }

    /// Map a terminal cell to the session index drawn there.
    ///
    /// `area` is the full table area including borders, `offset` the first
    /// visible row. Returns `None` for borders, the header row, and blank
    /// space below the last row.
    pub fn row_at(
        area: Rect,
        offset: usize,
        row_count: usize,
        column: u16,
        row: u16,
    ) -> Option<usize> {
        let data_area = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(TABLE_CHROME_TOP),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(TABLE_CHROME_TOP + 1),
        };
        if !data_area.contains(Position::new(column, row)) {
            return None;
        }

        let index = offset + usize::from(row - data_area.y);
        (index < row_count).then_some(index)
    }
}

impl Widget for SummaryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.focused_border()
        } else {
            self.styles.border()
        };
        let block = Block::default()
            .title(format!(" Sessions ({}) ", self.summaries.len()))
            .borders(Borders::ALL)
            .border_style(border_style);

        if self.summaries.is_empty() {
            Paragraph::new(Line::from(EMPTY_HINT))
                .style(self.styles.muted())
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(COLUMNS).style(self.styles.heading());
        let rows = self.summaries.iter().enumerate().map(|(idx, summary)| {
            let row = Row::new(format_row(summary));
            if self.selection == Some(idx) {
                row.style(self.styles.selected_row())
            } else {
                row
            }
        });

        let widths = [
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Fill(1),
        ];

        let highlight = if self.focused {
            self.styles.cursor_row()
        } else {
            Style::default()
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(highlight);

        let mut state = TableState::default()
            .with_offset(self.cursor.offset())
            .with_selected(Some(self.cursor.cursor()));

        StatefulWidget::render(table, area, buf, &mut state);
    }
}
