//! Domain model types (pure).
//!
//! Everything here is plain data plus pure functions: no filesystem, no terminal.

pub mod aggregate;
pub mod chart;
pub mod error;
pub mod event_log;
pub mod fields;
pub mod key_action;
pub mod session;
pub mod summary;

// Re-export for convenience
pub use aggregate::{aggregate, AggregateStats};
pub use chart::{draw_chart, BarPoint, BarSeries, ChartKind, ChartRenderer, ContentSlices};
pub use error::DecodeError;
pub use event_log::{event_log_lines, format_event, NO_EVENTS_MESSAGE};
pub use key_action::KeyAction;
pub use session::RawSession;
pub use summary::{
    summarize, summarize_all, ContentCategory, ContentSummary, SessionSummary, REFINED_EVENT_TYPE,
};
