//! Error types for the session pipeline.
//!
//! Only real boundaries get a typed error. Decoding a single session file can
//! fail in several distinct ways; the loader turns every [`DecodeError`] into
//! "this file is skipped", so these never reach the user. They exist so the
//! skip policy is visible in code and the reason lands in the log file.
//!
//! # Recovery Strategy
//!
//! - **Unreadable directory**: treated as zero sessions (see `source`).
//! - **Unreadable or malformed file**: skipped, logged at `warn`.
//! - **Missing or wrong-typed fields**: resolved by per-field defaults, never an error.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn one file into a [`RawSession`](crate::model::RawSession).
///
/// Every variant carries the offending path so the log line is actionable.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be read (permissions, directory named `*.json`,
    /// invalid UTF-8, removed between listing and reading).
    #[error("Failed to read {path:?}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid JSON.
    #[error("Invalid JSON in {path:?}: {source}")]
    Json {
        /// Path with invalid JSON.
        path: PathBuf,
        /// Parser error, including line and column.
        #[source]
        source: serde_json::Error,
    },

    /// The file decoded to a bare `null` document.
    ///
    /// A null document carries no session and is treated like a parse failure.
    #[error("Document in {path:?} is null")]
    NullDocument {
        /// Path whose document was `null`.
        path: PathBuf,
    },

    /// The path has no final file name component to use as the session identifier.
    #[error("Path has no file name: {0:?}")]
    NoFileName(PathBuf),
}

impl DecodeError {
    /// Path of the file that failed to decode.
    pub fn path(&self) -> &PathBuf {
        match self {
            DecodeError::Read { path, .. }
            | DecodeError::Json { path, .. }
            | DecodeError::NullDocument { path }
            | DecodeError::NoFileName(path) => path,
        }
    }
}
