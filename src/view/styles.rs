//! Dashboard styling configuration.
//!
//! Chart colors follow the classic palette: tons blue, tph green, refined
//! red, and gold / sky blue / grey for the content slices.

use crate::model::{ChartKind, ContentCategory};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== DashboardStyles =====

/// Styles for every dashboard element.
///
/// With colors disabled, foreground colors are dropped but modifiers
/// (bold, reversed) are kept so the cursor and selection stay visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStyles {
    colors: bool,
}

impl DashboardStyles {
    /// Styles for the given color configuration.
    pub fn new(config: ColorConfig) -> Self {
        Self {
            colors: config.colors_enabled(),
        }
    }

    fn fg(&self, color: Color) -> Style {
        if self.colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Header bar text.
    pub fn header(&self) -> Style {
        self.fg(Color::Cyan)
    }

    /// Header text while a load is in flight.
    pub fn loading(&self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Column headings and section titles.
    pub fn heading(&self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    /// Border of the focused pane.
    pub fn focused_border(&self) -> Style {
        self.fg(Color::Cyan)
    }

    /// Border of an unfocused pane.
    pub fn border(&self) -> Style {
        self.fg(Color::DarkGray)
    }

    /// Row under the keyboard cursor.
    pub fn cursor_row(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Character under the directory prompt cursor.
    pub fn prompt_cursor(&self) -> Style {
        let style = if self.colors {
            Style::default().bg(Color::White).fg(Color::Black)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };
        style.add_modifier(Modifier::BOLD)
    }

    /// The selected session's row.
    pub fn selected_row(&self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Hints, placeholders and other secondary text.
    pub fn muted(&self) -> Style {
        self.fg(Color::Gray)
    }

    /// Status messages.
    pub fn status(&self) -> Style {
        self.fg(Color::Yellow)
    }

    /// Keys in the help overlay.
    pub fn key(&self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Bar color for a bar chart kind.
    pub fn chart_bar(&self, kind: ChartKind) -> Style {
        self.fg(match kind {
            ChartKind::Tons => Color::Blue,
            ChartKind::Tph => Color::Green,
            ChartKind::Refined => Color::Red,
            ChartKind::Pie => Color::Yellow,
        })
    }

    /// Slice color for a content category.
    pub fn slice(&self, category: ContentCategory) -> Style {
        self.fg(match category {
            ContentCategory::High => Color::Yellow,
            ContentCategory::Medium => Color::LightBlue,
            ContentCategory::Low => Color::Gray,
        })
    }
}

impl Default for DashboardStyles {
    fn default() -> Self {
        Self::new(ColorConfig::enabled())
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_flag() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(
            !config.colors_enabled(),
            "NO_COLOR env var should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_enabled_by_default() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_args(false).colors_enabled());
    }

    #[test]
    fn chart_colors_match_kind() {
        let styles = DashboardStyles::default();
        assert_eq!(styles.chart_bar(ChartKind::Tons).fg, Some(Color::Blue));
        assert_eq!(styles.chart_bar(ChartKind::Tph).fg, Some(Color::Green));
        assert_eq!(styles.chart_bar(ChartKind::Refined).fg, Some(Color::Red));
        assert_eq!(styles.slice(ContentCategory::Medium).fg, Some(Color::LightBlue));
    }

    #[test]
    fn disabled_colors_drop_foreground_but_keep_modifiers() {
        let styles = DashboardStyles::new(ColorConfig::disabled());
        assert_eq!(styles.chart_bar(ChartKind::Tons).fg, None);
        assert_eq!(styles.selected_row().fg, None);
        assert!(styles.selected_row().add_modifier.contains(Modifier::BOLD));
        assert!(styles.cursor_row().add_modifier.contains(Modifier::REVERSED));
    }
}
