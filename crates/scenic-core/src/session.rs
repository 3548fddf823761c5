//! Session state management for scenario runs.
//!
//! This module provides the [`Session`] type, which tracks the state of one
//! automation run: a bounded in-memory history of executed actions plus
//! persistence of every action to a JSON Lines file under `~/.scenic/logs/`.
//!
//! # Example
//!
//! ```no_run
//! use scenic_core::session::Session;
//! use scenic_core::action::{ActionType, ActionResult};
//!
//! #[tokio::main]
//! async fn main() {
//!     let session = Session::new("default");
//!
//!     session.log_action(
//!         ActionType::Tap { selector: "change-text-button".to_string() },
//!         ActionResult::Success,
//!         Some(2),
//!     ).await;
//!
//!     assert_eq!(session.recent(10).await.len(), 1);
//! }
//! ```

use std::collections::VecDeque;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

use crate::action::{ActionLog, ActionResult, ActionType};

/// Maximum number of action log entries retained in memory.
const MAX_ACTION_LOG_SIZE: usize = 1000;

/// Returns the scenic home directory (`~/.scenic`).
///
/// Falls back to a relative `.scenic` directory when no home directory can be
/// determined.
pub fn scenic_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".scenic")
}

/// Returns the logs directory path (`~/.scenic/logs/`).
///
/// Creates the directory if it doesn't exist.
fn logs_dir() -> PathBuf {
    let dir = scenic_dir().join("logs");
    std::fs::create_dir_all(&dir).ok();
    dir
}

/// Shared state for one scenario run.
///
/// The session maintains:
/// - A unique identifier and creation timestamp
/// - A ring buffer of recent actions (up to 1000 entries)
/// - An optional JSON Lines writer persisting every logged action
pub struct Session {
    /// Unique identifier for this session.
    pub id: Uuid,

    /// When the session was created.
    pub created_at: DateTime<Utc>,

    /// Human-readable session name (used for the log file name).
    pub name: String,

    log: Mutex<VecDeque<ActionLog>>,
    writer: Option<Mutex<BufWriter<std::fs::File>>>,
}

impl Session {
    /// Creates a new session persisting actions to `~/.scenic/logs/<name>.jsonl`.
    pub fn new(name: &str) -> Arc<Self> {
        Self::new_with_log_dir(name, logs_dir())
    }

    /// Creates a new session persisting actions under the given directory.
    pub fn new_with_log_dir(name: &str, dir: PathBuf) -> Arc<Self> {
        let path = dir.join(format!("{}.jsonl", name));
        let writer = match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            Ok(file) => Some(Mutex::new(BufWriter::new(file))),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not open session log file");
                None
            }
        };
        Arc::new(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name: name.to_string(),
            log: Mutex::new(VecDeque::new()),
            writer,
        })
    }

    /// Creates a session that keeps actions in memory only.
    pub fn in_memory(name: &str) -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name: name.to_string(),
            log: Mutex::new(VecDeque::new()),
            writer: None,
        })
    }

    /// Logs an executed action.
    ///
    /// The entry is appended to the in-memory ring buffer (evicting the oldest
    /// entry past the cap) and flushed to the JSONL file when one is open.
    pub async fn log_action(
        &self,
        action: ActionType,
        result: ActionResult,
        duration_ms: Option<u64>,
    ) -> ActionLog {
        let entry = ActionLog::new(action, result, duration_ms);

        if let Some(writer) = &self.writer {
            match serde_json::to_string(&entry) {
                Ok(line) => {
                    let mut w = writer.lock().await;
                    if writeln!(w, "{}", line).and_then(|_| w.flush()).is_err() {
                        warn!("failed to persist action log entry");
                    }
                }
                Err(e) => warn!(error = %e, "failed to serialize action log entry"),
            }
        }

        let mut log = self.log.lock().await;
        if log.len() >= MAX_ACTION_LOG_SIZE {
            log.pop_front();
        }
        log.push_back(entry.clone());
        entry
    }

    /// Returns up to `count` most recent log entries, oldest first.
    pub async fn recent(&self, count: usize) -> Vec<ActionLog> {
        let log = self.log.lock().await;
        log.iter().rev().take(count).rev().cloned().collect()
    }

    /// Returns the number of logged actions currently retained.
    pub async fn len(&self) -> usize {
        self.log.lock().await.len()
    }

    /// Returns true if no actions have been logged.
    pub async fn is_empty(&self) -> bool {
        self.log.lock().await.is_empty()
    }
}
