//! Directory prompt widget.

use super::styles::DashboardStyles;
use crate::state::DirInputState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the directory prompt while it is open.
pub struct DirInput<'a> {
    state: &'a DirInputState,
    styles: DashboardStyles,
}

impl<'a> DirInput<'a> {
    /// Create the widget.
    pub fn new(state: &'a DirInputState) -> Self {
        Self {
            state,
            styles: DashboardStyles::default(),
        }
    }

    /// Use the given styles.
    pub fn styles(mut self, styles: DashboardStyles) -> Self {
        self.styles = styles;
        self
    }
}

impl Widget for DirInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let DirInputState::Typing { input, cursor } = self.state else {
            return;
        };

        let before: String = input.chars().take(*cursor).collect();
        let mut rest = input.chars().skip(*cursor);
        let cursor_char = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(cursor_char, self.styles.prompt_cursor()),
            Span::raw(after),
        ]);

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.styles.focused_border())
                    .title(" Open directory (Enter: load, Esc: cancel) "),
            )
            .render(area, buf);
    }
}
