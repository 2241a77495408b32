//! Terminal chart backend.
//!
//! [`TerminalChart`] implements [`ChartRenderer`] on a ratatui buffer. The
//! three per-session charts are vertical bar charts; the content chart has no
//! native pie widget in a terminal, so its three slices are drawn as
//! horizontal bars annotated with their share of the total.

use super::constants::{BAR_GAP, BAR_WIDTH};
use super::styles::DashboardStyles;
use crate::model::{BarSeries, ChartKind, ChartRenderer, ContentSlices};
use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Widget},
};

/// Bar heights are fractions of the largest bar in the chart, in this many
/// steps. Keeps `Bar::value` small whatever the session values are.
const BAR_RESOLUTION: f64 = 10_000.0;

fn scaled(value: f64, max: f64) -> u64 {
    let ratio = value / max;
    if ratio.is_finite() && ratio > 0.0 {
        (ratio.min(1.0) * BAR_RESOLUTION).round() as u64
    } else {
        0
    }
}

/// Bar annotation: whole numbers as-is, everything else to two decimals.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value}")
    } else {
        format!("{value:.2}")
    }
}

/// Bar width that fits `count` bars in `inner_width`, no wider than the
/// longest label and never narrower than one cell.
fn fit_bar_width(inner_width: u16, count: usize, longest_label: usize) -> u16 {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    let per_bar = (inner_width / count).saturating_sub(BAR_GAP);
    let wanted = u16::try_from(longest_label)
        .unwrap_or(u16::MAX)
        .max(BAR_WIDTH);
    wanted.min(per_bar).max(1)
}

/// Immediate-mode chart renderer over a buffer region.
///
/// Every draw clears the region first, so at most one chart is ever visible.
pub struct TerminalChart<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    styles: DashboardStyles,
}

impl<'a> TerminalChart<'a> {
    /// Renderer drawing into `area` of `buf`.
    pub fn new(area: Rect, buf: &'a mut Buffer, styles: DashboardStyles) -> Self {
        Self { area, buf, styles }
    }

    fn block(title: &str, legend: &str) -> Block<'static> {
        Block::default()
            .title(format!(" {title} "))
            .title_bottom(Line::from(format!(" {legend} ")).right_aligned())
            .borders(Borders::ALL)
    }

    fn bars(&mut self, kind: ChartKind, series: &BarSeries) {
        Clear.render(self.area, self.buf);

        let block = Self::block(series.title, series.value_label);
        let inner_width = block.inner(self.area).width;
        let longest = series
            .points
            .iter()
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0);
        let bar_width = fit_bar_width(inner_width, series.points.len(), longest);
        let max = series.max_value();

        let bars: Vec<Bar> = series
            .points
            .iter()
            .map(|point| {
                Bar::default()
                    .label(Line::from(point.label.clone()))
                    .value(scaled(point.value, max))
                    .text_value(format_value(point.value))
            })
            .collect();

        BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(BAR_GAP)
            .bar_style(self.styles.chart_bar(kind))
            .label_style(self.styles.muted())
            .render(self.area, self.buf);
    }
}

impl ChartRenderer for TerminalChart<'_> {
    type Output = ();

    fn tons(&mut self, series: &BarSeries) {
        self.bars(ChartKind::Tons, series);
    }

    fn tph(&mut self, series: &BarSeries) {
        self.bars(ChartKind::Tph, series);
    }

    fn refined(&mut self, series: &BarSeries) {
        self.bars(ChartKind::Refined, series);
    }

    fn pie(&mut self, slices: &ContentSlices) {
        Clear.render(self.area, self.buf);

        let max = slices
            .slices()
            .into_iter()
            .map(|(_, value)| value)
            .fold(0.0, f64::max);
        let bars: Vec<Bar> = slices
            .slices()
            .into_iter()
            .map(|(category, value)| {
                let style = self.styles.slice(category);
                Bar::default()
                    .label(Line::from(category.as_str()))
                    .value(scaled(value, max))
                    .text_value(format!(
                        "{} ({:.1}%)",
                        format_value(value),
                        slices.percent(category)
                    ))
                    .style(style)
            })
            .collect();

        BarChart::default()
            .block(Self::block(ContentSlices::TITLE, "Asteroid content"))
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(1)
            .label_style(self.styles.muted())
            .render(self.area, self.buf);
    }
}
