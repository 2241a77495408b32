//! Event log pane for the selected session.

use super::styles::DashboardStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Scrollable, bordered list of formatted event lines.
///
/// Lines are rendered unwrapped; long `details` JSON is clipped at the pane
/// edge.
pub struct EventLog<'a> {
    lines: &'a [String],
    title: String,
    scroll: u16,
    focused: bool,
    styles: DashboardStyles,
}

impl<'a> EventLog<'a> {
    /// Create a pane over pre-formatted `lines`.
    pub fn new(lines: &'a [String]) -> Self {
        Self {
            lines,
            title: " Event Log ".to_string(),
            scroll: 0,
            focused: false,
            styles: DashboardStyles::default(),
        }
    }

    /// Show the session's file name in the title.
    pub fn file(mut self, file: Option<&str>) -> Self {
        if let Some(file) = file {
            self.title = format!(" Event Log: {file} ");
        }
        self
    }

    /// First visible line.
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Whether the pane has keyboard focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Use the given styles.
    pub fn styles(mut self, styles: DashboardStyles) -> Self {
        self.styles = styles;
        self
    }
}

impl Widget for EventLog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.focused_border()
        } else {
            self.styles.border()
        };

        let lines: Vec<Line> = self
            .lines
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NO_EVENTS_MESSAGE;
    use crate::view::test_support::buffer_to_string;

    fn render(widget: EventLog, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn renders_placeholder_line() {
        let lines = vec![NO_EVENTS_MESSAGE.to_string()];
        let text = render(EventLog::new(&lines), 30, 3);
        assert!(text.contains("Event Log"));
        assert!(text.contains(NO_EVENTS_MESSAGE));
    }

    #[test]
    fn title_names_selected_file() {
        let lines = vec!["x".to_string()];
        let text = render(EventLog::new(&lines).file(Some("run.json")), 30, 3);
        assert!(text.contains("Event Log: run.json"));
    }

    #[test]
    fn scroll_skips_leading_lines() {
        let lines: Vec<String> = (0..5).map(|i| format!("t{i} | scan | {{}}")).collect();
        let text = render(EventLog::new(&lines).scroll(3), 30, 4);
        assert!(!text.contains("t0 |"));
        assert!(text.contains("t3 | scan | {}"));
        assert!(text.contains("t4 | scan | {}"));
    }
}
