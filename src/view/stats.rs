//! Aggregate statistics line.

use super::styles::DashboardStyles;
use crate::model::AggregateStats;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Label/value pairs for the aggregate line, averages to two decimals.
pub fn aggregate_fields(stats: &AggregateStats) -> [(&'static str, String); 5] {
    [
        ("Total Tons", format!("{}", stats.total_tons)),
        ("Avg Tons/Session", format!("{:.2}", stats.avg_tons)),
        ("Total Duration (s)", format!("{}", stats.total_duration)),
        ("Avg TPH", format!("{:.2}", stats.avg_tph)),
        ("Total Refined Events", stats.total_refined.to_string()),
    ]
}

// ===== AggregatePanel Widget =====

/// Totals and averages across all loaded sessions.
///
/// Renders an empty block when nothing is loaded.
pub struct AggregatePanel<'a> {
    stats: Option<&'a AggregateStats>,
    styles: DashboardStyles,
}

impl<'a> AggregatePanel<'a> {
    /// Create the panel.
    pub fn new(stats: Option<&'a AggregateStats>) -> Self {
        Self {
            stats,
            styles: DashboardStyles::default(),
        }
    }

    /// Use the given styles.
    pub fn styles(mut self, styles: DashboardStyles) -> Self {
        self.styles = styles;
        self
    }
}

impl Widget for AggregatePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Aggregates ")
            .borders(Borders::ALL)
            .border_style(self.styles.border());

        let line = match self.stats {
            Some(stats) => {
                let mut spans = Vec::new();
                for (i, (label, value)) in aggregate_fields(stats).into_iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::styled(" | ", self.styles.muted()));
                    }
                    spans.push(Span::styled(format!("{label}: "), self.styles.heading()));
                    spans.push(Span::raw(value));
                }
                Line::from(spans)
            }
            None => Line::default(),
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
