//! Chart kinds, chart data, and the pluggable renderer seam.
//!
//! The data for each chart is computed here from summaries alone. Drawing is
//! delegated to a [`ChartRenderer`], so the terminal backend can be swapped
//! without touching the summary or aggregate code.

use crate::model::summary::ContentCategory;
use crate::model::SessionSummary;
use std::fmt;

// ===== ChartKind =====

/// The four aggregate visualizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    /// Tons mined, one bar per session labeled by file.
    #[default]
    Tons,
    /// Tons per hour, one bar per session labeled `Session N`.
    Tph,
    /// Refined event count, one bar per session labeled by file.
    Refined,
    /// Asteroid content totals across all sessions, three slices.
    Pie,
}

impl ChartKind {
    /// All kinds in selector order.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Tons,
        ChartKind::Tph,
        ChartKind::Refined,
        ChartKind::Pie,
    ];

    /// Parse a kind name (`tons`, `tph`, `refined`, `pie`), ignoring ASCII case
    /// and surrounding whitespace.
    ///
    /// Unknown names return `None`.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    /// Short machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Tons => "tons",
            ChartKind::Tph => "tph",
            ChartKind::Refined => "refined",
            ChartKind::Pie => "pie",
        }
    }

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Tons => "Tons mined per session",
            ChartKind::Tph => "TPH per session",
            ChartKind::Refined => "Refined events per session",
            ChartKind::Pie => "Asteroid content (pie)",
        }
    }

    /// Next kind in selector order, wrapping.
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous kind in selector order, wrapping.
    pub fn prev(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        match self {
            ChartKind::Tons => 0,
            ChartKind::Tph => 1,
            ChartKind::Refined => 2,
            ChartKind::Pie => 3,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Chart data =====

/// One labeled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    /// Axis label.
    pub label: String,
    /// Bar height.
    pub value: f64,
}

/// A titled bar series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Chart title.
    pub title: &'static str,
    /// Legend label for the values.
    pub value_label: &'static str,
    /// Bars in session order.
    pub points: Vec<BarPoint>,
}

impl BarSeries {
    /// Tons mined per session, labeled by file name.
    pub fn tons(summaries: &[SessionSummary]) -> Self {
        Self {
            title: "Tons mined per session",
            value_label: "Tons mined",
            points: summaries
                .iter()
                .map(|s| BarPoint {
                    label: s.file.clone(),
                    value: s.tons,
                })
                .collect(),
        }
    }

    /// Tons per hour per session, labeled `Session 1`, `Session 2`, ...
    pub fn tph(summaries: &[SessionSummary]) -> Self {
        Self {
            title: "TPH per session",
            value_label: "TPH",
            points: summaries
                .iter()
                .enumerate()
                .map(|(i, s)| BarPoint {
                    label: format!("Session {}", i + 1),
                    value: s.tph,
                })
                .collect(),
        }
    }

    /// Refined events per session, labeled by file name.
    pub fn refined(summaries: &[SessionSummary]) -> Self {
        Self {
            title: "Refined events per session",
            value_label: "Refined Events",
            points: summaries
                .iter()
                .map(|s| BarPoint {
                    label: s.file.clone(),
                    value: s.refined as f64,
                })
                .collect(),
        }
    }

    /// Largest bar value, 0 for an empty series.
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }
}

/// Asteroid content totals across all sessions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentSlices {
    /// Sum of `content_summary.High`.
    pub high: f64,
    /// Sum of `content_summary.Medium`.
    pub medium: f64,
    /// Sum of `content_summary.Low`.
    pub low: f64,
}

impl ContentSlices {
    /// Chart title.
    pub const TITLE: &'static str = "Asteroid content summary (all sessions)";

    /// Sum each known category over every session.
    pub fn from_summaries(summaries: &[SessionSummary]) -> Self {
        summaries.iter().fold(Self::default(), |acc, s| {
            let content = &s.content_summary;
            Self {
                high: acc.high + content.count(ContentCategory::High),
                medium: acc.medium + content.count(ContentCategory::Medium),
                low: acc.low + content.count(ContentCategory::Low),
            }
        })
    }

    /// The three slices in display order.
    pub fn slices(&self) -> [(ContentCategory, f64); 3] {
        [
            (ContentCategory::High, self.high),
            (ContentCategory::Medium, self.medium),
            (ContentCategory::Low, self.low),
        ]
    }

    /// Sum of all slices.
    pub fn total(&self) -> f64 {
        self.high + self.medium + self.low
    }

    /// Percentage of the total held by `category`; 0 when the total is 0.
    pub fn percent(&self, category: ContentCategory) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        let value = match category {
            ContentCategory::High => self.high,
            ContentCategory::Medium => self.medium,
            ContentCategory::Low => self.low,
        };
        value / total * 100.0
    }
}

// ===== Renderer seam =====

/// A drawing backend with one method per chart kind.
pub trait ChartRenderer {
    /// What a draw call produces (unit for immediate-mode backends).
    type Output;

    /// Draw the tons-per-session bars.
    fn tons(&mut self, series: &BarSeries) -> Self::Output;

    /// Draw the TPH-per-session bars.
    fn tph(&mut self, series: &BarSeries) -> Self::Output;

    /// Draw the refined-events-per-session bars.
    fn refined(&mut self, series: &BarSeries) -> Self::Output;

    /// Draw the three-slice content chart.
    fn pie(&mut self, slices: &ContentSlices) -> Self::Output;
}

/// Build the data for `kind` and hand it to the matching renderer method.
pub fn draw_chart<R: ChartRenderer>(
    kind: ChartKind,
    summaries: &[SessionSummary],
    renderer: &mut R,
) -> R::Output {
    match kind {
        ChartKind::Tons => renderer.tons(&BarSeries::tons(summaries)),
        ChartKind::Tph => renderer.tph(&BarSeries::tph(summaries)),
        ChartKind::Refined => renderer.refined(&BarSeries::refined(summaries)),
        ChartKind::Pie => renderer.pie(&ContentSlices::from_summaries(summaries)),
    }
}
