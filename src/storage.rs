//! Local persistence for saved readings.
//!
//! Readings live in one `SQLite` database under the storage root:
//!
//! ```text
//! <root>/
//!   history.sqlite   # reading table: id, saved_at, note, payload (JSON)
//! ```

mod history;

use std::{fs, io, path::PathBuf};

use rusqlite::Connection;
use uuid::Uuid;

pub use history::HistoryEntry;

/// Readings kept when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS reading (
    id TEXT PRIMARY KEY NOT NULL,
    saved_at TEXT NOT NULL,
    note TEXT,
    payload TEXT NOT NULL
)";

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("reading not found: {0}")]
    NotFound(Uuid),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupt history record: {0}")]
    Corrupt(String),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Local `SQLite`-backed storage for readings.
pub struct Storage {
    root: PathBuf,
    history_limit: u32,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            history_limit: DEFAULT_HISTORY_LIMIT,
        })
    }

    /// Keeps at most `limit` readings (at least one).
    #[must_use]
    pub fn with_history_limit(mut self, limit: u32) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    /// Returns the default storage root: `~/.meihua/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".meihua"))
    }

    fn db_path(&self) -> PathBuf {
        self.root.join("history.sqlite")
    }

    /// Opens the history database, creating the table on first use.
    fn open_db(&self) -> Result<Connection> {
        let conn = Connection::open(self.db_path())?;
        conn.execute_batch(SCHEMA)?;
        Ok(conn)
    }
}
