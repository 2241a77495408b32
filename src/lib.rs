//! Mining session dashboard (minedash)
//!
//! TUI application that loads a directory of JSON mining session logs,
//! summarizes each session, aggregates the totals and draws charts.
//!
//! The crate follows a Pure Core / Impure Shell split: `model` and `state`
//! are pure, `source` touches the filesystem, `view` owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
