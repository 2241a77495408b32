//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::DashboardStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut table: category, then (keys, description) rows.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/↓", "Move down (table) or scroll down (event log)"),
            ("k/↑", "Move up (table) or scroll up (event log)"),
            ("Ctrl+d/PgDn", "Page down"),
            ("Ctrl+u/PgUp", "Page up"),
            ("g/Home", "Go to top"),
            ("G/End", "Go to bottom"),
            ("Tab", "Switch focus between table and event log"),
        ],
    ),
    (
        "Sessions",
        &[
            ("Enter", "Show the event log of the row under the cursor"),
            ("Click", "Select a row"),
            ("o", "Open a session directory"),
            ("r", "Reload the current directory"),
        ],
    ),
    (
        "Charts",
        &[
            ("]", "Next chart kind"),
            ("[", "Previous chart kind"),
            ("d", "Draw the chosen chart"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

const KEY_COLUMN_WIDTH: usize = 14;

/// Number of lines in the help content.
pub fn help_line_count() -> u16 {
    let rows: usize = SECTIONS.iter().map(|(_, keys)| keys.len() + 2).sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Render the help overlay centered on the screen.
///
/// `scroll_offset` is the first content line shown.
pub fn render_help_overlay(frame: &mut Frame, scroll_offset: u16, styles: DashboardStyles) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.focused_border()),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.muted().add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(styles: DashboardStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (category, keys) in SECTIONS {
        lines.push(Line::from(Span::styled(*category, styles.heading())));
        for (key, description) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<KEY_COLUMN_WIDTH$}"), styles.key()),
                Span::raw(*description),
            ]));
        }
        lines.push(Line::default());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_support::buffer_to_string;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn centered_rect_is_centered() {
        let rect = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn help_content_lists_every_shortcut() {
        let lines = build_help_content(DashboardStyles::default());
        assert_eq!(lines.len(), usize::from(help_line_count()));
    }

    #[test]
    fn overlay_shows_title_and_chart_keys() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        terminal
            .draw(|frame| render_help_overlay(frame, 0, DashboardStyles::default()))
            .unwrap();

        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Draw the chosen chart"));
        assert!(text.contains("Press Esc or ? to close"));
    }
}
