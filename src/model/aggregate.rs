//! Totals and averages across all loaded sessions.

use crate::model::SessionSummary;

/// Aggregate statistics over a non-empty set of summaries.
///
/// Only constructed by [`aggregate`], which refuses empty input, so the
/// averages are always well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateStats {
    /// Number of sessions aggregated (always at least 1).
    pub session_count: usize,
    /// Sum of `tons`.
    pub total_tons: f64,
    /// Mean of `tons`.
    pub avg_tons: f64,
    /// Sum of `duration` in seconds.
    pub total_duration: f64,
    /// Mean of `tph`.
    pub avg_tph: f64,
    /// Sum of `refined`.
    pub total_refined: u64,
}

/// Reduce summaries to totals and averages.
///
/// Returns `None` for an empty slice; callers render nothing in that case.
pub fn aggregate(summaries: &[SessionSummary]) -> Option<AggregateStats> {
    if summaries.is_empty() {
        return None;
    }

    let count = summaries.len() as f64;
    let total_tons: f64 = summaries.iter().map(|s| s.tons).sum();
    let total_tph: f64 = summaries.iter().map(|s| s.tph).sum();

    Some(AggregateStats {
        session_count: summaries.len(),
        total_tons,
        avg_tons: total_tons / count,
        total_duration: summaries.iter().map(|s| s.duration).sum(),
        avg_tph: total_tph / count,
        total_refined: summaries.iter().map(|s| s.refined).sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(tons: f64, tph: f64, duration: f64, refined: u64) -> SessionSummary {
        SessionSummary {
            tons,
            tph,
            duration,
            refined,
            ..SessionSummary::empty("s.json")
        }
    }

    #[test]
    fn empty_input_returns_none() {
        assert_eq!(aggregate(&[]), None);
    }

    #[test]
    fn totals_and_averages_for_two_sessions() {
        let stats = aggregate(&[summary(10.0, 5.0, 100.0, 2), summary(20.0, 15.0, 200.0, 3)])
            .expect("non-empty input aggregates");

        assert_eq!(stats.session_count, 2);
        assert_eq!(stats.total_tons, 30.0);
        assert_eq!(stats.avg_tons, 15.0);
        assert_eq!(stats.total_duration, 300.0);
        assert_eq!(stats.avg_tph, 10.0);
        assert_eq!(stats.total_refined, 5);
    }

    #[test]
    fn single_session_average_equals_value() {
        let stats = aggregate(&[summary(7.5, 3.25, 60.0, 1)]).unwrap();
        assert_eq!(stats.avg_tons, 7.5);
        assert_eq!(stats.avg_tph, 3.25);
    }

    #[test]
    fn all_zero_sessions_produce_finite_zeroes() {
        let stats = aggregate(&[SessionSummary::empty("a.json"), SessionSummary::empty("b.json")])
            .unwrap();
        assert_eq!(stats.avg_tons, 0.0);
        assert_eq!(stats.avg_tph, 0.0);
        assert!(stats.avg_tons.is_finite());
    }
}
