//! Session directory loading.
//!
//! This module is the filesystem-facing half of the pipeline:
//! - [`load_sessions`] lists a directory and decodes every `.json` file
//! - [`decode_session`] decodes a single file into a [`RawSession`]
//! - [`worker::LoadWorker`] runs loads off the UI thread
//!
//! Loading is best effort. A file that fails to decode is skipped and a
//! directory that cannot be listed yields no sessions; both are logged, and
//! neither is an error for the caller.

use crate::model::{DecodeError, RawSession};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod worker;

pub use worker::{LoadOutcome, LoadWorker};

/// File name suffix of session files.
pub const SESSION_EXTENSION: &str = ".json";

/// Load every decodable session file in `dir`, in directory listing order.
///
/// Files whose names end with [`SESSION_EXTENSION`] are decoded; failures are
/// filtered out. A directory that cannot be listed yields an empty vector.
pub fn load_sessions(dir: &Path) -> Vec<RawSession> {
    let candidates = match list_candidates(dir) {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!(dir = ?dir, error = %e, "Failed to list session directory");
            return Vec::new();
        }
    };

    let sessions: Vec<RawSession> = candidates
        .into_iter()
        .filter_map(|path| match decode_session(&path) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(path = ?e.path(), error = %e, "Skipping session file");
                None
            }
        })
        .collect();

    debug!(dir = ?dir, count = sessions.len(), "Loaded sessions");
    sessions
}

/// List the paths in `dir` whose file names end with [`SESSION_EXTENSION`].
///
/// Names are matched lossily, so a non-UTF-8 name ending in `.json` still
/// counts. Entries that disappear or error mid-listing are skipped.
///
/// # Errors
///
/// Returns the I/O error if the directory itself cannot be read.
pub fn list_candidates(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)?;

    Ok(entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(SESSION_EXTENSION))
        .map(|entry| entry.path())
        .collect())
}

/// Read and decode one session file.
///
/// # Errors
///
/// - [`DecodeError::Read`] if the file cannot be read as UTF-8 text
/// - [`DecodeError::Json`] if the contents are not valid JSON
/// - [`DecodeError::NullDocument`] if the document is `null`
/// - [`DecodeError::NoFileName`] if the path has no file name
pub fn decode_session(path: &Path) -> Result<RawSession, DecodeError> {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| DecodeError::NoFileName(path.to_path_buf()))?;

    let contents = std::fs::read_to_string(path).map_err(|source| DecodeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let data: serde_json::Value =
        serde_json::from_str(&contents).map_err(|source| DecodeError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    if data.is_null() {
        return Err(DecodeError::NullDocument {
            path: path.to_path_buf(),
        });
    }

    Ok(RawSession::new(file, data))
}
