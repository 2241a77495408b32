//! Flattened per-session summary records.
//!
//! [`summarize`] is a pure function from a [`RawSession`] to a
//! [`SessionSummary`]. Every field has a declared default, so a document with
//! missing or wrong-typed fields always produces a complete summary.

use crate::model::fields::{array_or_empty, lookup, non_empty_text, number_or_zero, text_or_empty};
use crate::model::RawSession;
use serde_json::Value;
use std::collections::BTreeMap;

/// Event `type` tag marking completion of an ore refinement.
pub const REFINED_EVENT_TYPE: &str = "mining_refined";

// ===== ContentCategory =====

/// Asteroid material richness category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCategory {
    /// High material content.
    High,
    /// Medium material content.
    Medium,
    /// Low material content.
    Low,
}

impl ContentCategory {
    /// All categories in display order.
    pub const ALL: [ContentCategory; 3] = [
        ContentCategory::High,
        ContentCategory::Medium,
        ContentCategory::Low,
    ];

    /// Key used for this category in `content_summary` maps.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentCategory::High => "High",
            ContentCategory::Medium => "Medium",
            ContentCategory::Low => "Low",
        }
    }
}

// ===== ContentSummary =====

/// Per-category counts of asteroids encountered in a session.
///
/// Keys are preserved from the source document, including ones outside
/// High/Medium/Low. Aggregation only reads the three known categories.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSummary {
    counts: BTreeMap<String, f64>,
}

impl Default for ContentSummary {
    /// `{High: 0, Medium: 0, Low: 0}`.
    fn default() -> Self {
        Self::with_counts(0.0, 0.0, 0.0)
    }
}

impl ContentSummary {
    /// Build a summary with the three known categories.
    pub fn with_counts(high: f64, medium: f64, low: f64) -> Self {
        let counts = [
            (ContentCategory::High, high),
            (ContentCategory::Medium, medium),
            (ContentCategory::Low, low),
        ]
        .into_iter()
        .map(|(category, count)| (category.as_str().to_string(), count))
        .collect();
        Self { counts }
    }

    /// Read a `content_summary` value.
    ///
    /// Anything other than an object falls back to the all-zero default.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_object) {
            Some(map) => Self {
                counts: map
                    .iter()
                    .map(|(key, count)| (key.clone(), number_or_zero(Some(count))))
                    .collect(),
            },
            None => Self::default(),
        }
    }

    /// Count for a known category, 0 when the source map lacks it.
    pub fn count(&self, category: ContentCategory) -> f64 {
        self.get(category.as_str()).unwrap_or(0.0)
    }

    /// Count for an arbitrary key, if present.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.counts.get(key).copied()
    }
}

// ===== SessionSummary =====

/// Flat view of one session, one per successfully loaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Source file name.
    pub file: String,
    /// `meta.start_time`, or empty.
    pub start: String,
    /// `meta.end_time`, or empty.
    pub end: String,
    /// `meta.duration_seconds`, or 0.
    pub duration: f64,
    /// `meta.overall_tph.tons`, or 0.
    pub tons: f64,
    /// `meta.overall_tph.tons_per_hour`, or 0.
    pub tph: f64,
    /// Number of `mining_refined` events.
    pub refined: u64,
    /// `meta.commander`, or empty.
    pub commander: String,
    /// `meta.ring`, falling back to `meta.location.body`, or empty.
    pub ring: String,
    /// `meta.content_summary`, or all-zero High/Medium/Low.
    pub content_summary: ContentSummary,
}

impl SessionSummary {
    /// An all-defaults summary for `file`.
    pub fn empty(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            start: String::new(),
            end: String::new(),
            duration: 0.0,
            tons: 0.0,
            tph: 0.0,
            refined: 0,
            commander: String::new(),
            ring: String::new(),
            content_summary: ContentSummary::default(),
        }
    }
}

/// Summarize one session.
pub fn summarize(session: &RawSession) -> SessionSummary {
    let data = session.data();
    let meta = data.get("meta");
    let field = |path: &[&str]| meta.and_then(|m| lookup(m, path));

    let ring = non_empty_text(field(&["ring"]))
        .unwrap_or_else(|| text_or_empty(field(&["location", "body"])));

    SessionSummary {
        file: session.file().to_string(),
        start: text_or_empty(field(&["start_time"])),
        end: text_or_empty(field(&["end_time"])),
        duration: number_or_zero(field(&["duration_seconds"])),
        tons: number_or_zero(field(&["overall_tph", "tons"])),
        tph: number_or_zero(field(&["overall_tph", "tons_per_hour"])),
        refined: count_refined(array_or_empty(data.get("events"))),
        commander: text_or_empty(field(&["commander"])),
        ring,
        content_summary: ContentSummary::from_value(field(&["content_summary"])),
    }
}

/// Summarize every session, preserving order.
pub fn summarize_all(sessions: &[RawSession]) -> Vec<SessionSummary> {
    sessions.iter().map(summarize).collect()
}

fn count_refined(events: &[Value]) -> u64 {
    events
        .iter()
        .filter(|event| event.get("type").and_then(Value::as_str) == Some(REFINED_EVENT_TYPE))
        .count() as u64
}
