//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header bar (directory readout and load status).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the aggregate stats block (border + one line).
pub const AGGREGATE_HEIGHT: u16 = 3;

/// Height of the chart selector line.
pub const CHART_SELECTOR_HEIGHT: u16 = 1;

/// Height of the directory prompt (border + input line).
pub const DIR_INPUT_HEIGHT: u16 = 3;

/// Share of the body height given to the summary table.
pub const TABLE_HEIGHT_PERCENT: u16 = 40;

/// Share of the lower body width given to the chart (the event log gets the rest).
pub const CHART_WIDTH_PERCENT: u16 = 55;

/// Rows taken by the table border and column header row.
///
/// Used to map a click to a data row.
pub const TABLE_CHROME_TOP: u16 = 2;

/// Width of a bar in the vertical bar charts.
pub const BAR_WIDTH: u16 = 7;

/// Gap between bars in the vertical bar charts.
pub const BAR_GAP: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
