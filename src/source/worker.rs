//! Background directory loads.
//!
//! Each request runs [`load_sessions`] on its own thread and reports back over
//! a channel. Requests are numbered with a generation so the caller can tell a
//! superseded result from the one it is waiting for.

use super::load_sessions;
use crate::model::RawSession;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tracing::{debug, warn};

/// Result of one load request.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// Generation returned by [`LoadWorker::request`] for this load.
    pub generation: u64,
    /// Directory that was loaded.
    pub directory: PathBuf,
    /// Sessions decoded from the directory.
    pub sessions: Vec<RawSession>,
}

/// Runs directory loads off the UI thread.
#[derive(Debug)]
pub struct LoadWorker {
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
    last_generation: u64,
}

impl Default for LoadWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadWorker {
    /// Create a worker with no loads in flight.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            last_generation: 0,
        }
    }

    /// Start loading `directory` and return the generation of this request.
    ///
    /// Generations strictly increase. If a loader thread cannot be spawned the
    /// load runs inline and its outcome is queued the same way.
    pub fn request(&mut self, directory: PathBuf) -> u64 {
        self.last_generation += 1;
        let generation = self.last_generation;
        let tx = self.tx.clone();
        let thread_dir = directory.clone();

        let spawned = std::thread::Builder::new()
            .name(format!("session-load-{generation}"))
            .spawn(move || {
                let sessions = load_sessions(&thread_dir);
                // Receiver dropped means the app is exiting
                let _ = tx.send(LoadOutcome {
                    generation,
                    directory: thread_dir,
                    sessions,
                });
            });

        if let Err(e) = spawned {
            warn!(error = %e, "Failed to spawn loader thread, loading inline");
            let sessions = load_sessions(&directory);
            let _ = self.tx.send(LoadOutcome {
                generation,
                directory,
                sessions,
            });
        } else {
            debug!(generation, "Load requested");
        }

        generation
    }

    /// Drain all finished loads without blocking.
    pub fn poll(&self) -> Vec<LoadOutcome> {
        self.rx.try_iter().collect()
    }

    /// Block up to `timeout` for the next finished load.
    pub fn wait(&self, timeout: Duration) -> Option<LoadOutcome> {
        self.rx.recv_timeout(timeout).ok()
    }
}
