//! History storage: save, list, load, annotate, and delete readings.

use jiff::Timestamp;
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::model::DivinationResult;

use super::{Result, Storage, StorageError};

/// A saved reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub saved_at: Timestamp,
    pub note: Option<String>,
    pub reading: DivinationResult,
}

/// Column values as stored, before decoding.
struct RawEntry {
    id: String,
    saved_at: String,
    note: Option<String>,
    payload: String,
}

impl Storage {
    /// Saves a reading, then drops the oldest entries beyond the history
    /// limit.
    pub fn save_reading(
        &self,
        reading: &DivinationResult,
        note: Option<&str>,
    ) -> Result<HistoryEntry> {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            saved_at: Timestamp::now(),
            note: clean_note(note),
            reading: reading.clone(),
        };

        let conn = self.open_db()?;
        conn.execute(
            "INSERT INTO reading (id, saved_at, note, payload) VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.id.to_string(),
                entry.saved_at.to_string(),
                &entry.note,
                serde_json::to_string(&entry.reading)?,
            ],
        )?;
        debug!(id = %entry.id, "reading saved");

        let trimmed = conn.execute(
            "DELETE FROM reading WHERE rowid NOT IN
             (SELECT rowid FROM reading ORDER BY rowid DESC LIMIT ?1)",
            params![i64::from(self.history_limit)],
        )?;
        if trimmed > 0 {
            warn!(
                trimmed,
                limit = self.history_limit,
                "history over limit, oldest readings dropped"
            );
        }

        Ok(entry)
    }

    /// Lists saved readings, newest first.
    ///
    /// Rows that fail to decode are skipped.
    pub fn list_readings(&self) -> Result<Vec<HistoryEntry>> {
        let conn = self.open_db()?;
        let mut stmt = conn.prepare(
            "SELECT id, saved_at, note, payload FROM reading ORDER BY rowid DESC",
        )?;
        let rows = stmt.query_map([], raw_entry)?;

        let mut entries = Vec::new();
        for row in rows {
            match decode(row?) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(error = %e, "skipping malformed history row"),
            }
        }
        Ok(entries)
    }

    /// Loads a single saved reading.
    pub fn load_reading(&self, id: Uuid) -> Result<HistoryEntry> {
        let conn = self.open_db()?;
        load_row(&conn, id)?
            .ok_or(StorageError::NotFound(id))
            .and_then(decode)
    }

    /// Replaces a reading's note. A blank note clears it.
    pub fn update_note(&self, id: Uuid, note: Option<&str>) -> Result<HistoryEntry> {
        let conn = self.open_db()?;
        let rows = conn.execute(
            "UPDATE reading SET note = ?1 WHERE id = ?2",
            params![clean_note(note), id.to_string()],
        )?;
        if rows == 0 {
            return Err(StorageError::NotFound(id));
        }
        debug!(%id, "note updated");
        load_row(&conn, id)?
            .ok_or(StorageError::NotFound(id))
            .and_then(decode)
    }

    /// Deletes a single saved reading.
    pub fn delete_reading(&self, id: Uuid) -> Result<()> {
        let conn = self.open_db()?;
        let rows = conn.execute("DELETE FROM reading WHERE id = ?1", params![id.to_string()])?;
        if rows == 0 {
            return Err(StorageError::NotFound(id));
        }
        debug!(%id, "reading deleted");
        Ok(())
    }

    /// Deletes every saved reading. Returns how many were removed.
    pub fn clear_history(&self) -> Result<usize> {
        let conn = self.open_db()?;
        let rows = conn.execute("DELETE FROM reading", [])?;
        debug!(rows, "history cleared");
        Ok(rows)
    }
}

fn clean_note(note: Option<&str>) -> Option<String> {
    note.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
}

fn raw_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawEntry> {
    Ok(RawEntry {
        id: row.get(0)?,
        saved_at: row.get(1)?,
        note: row.get(2)?,
        payload: row.get(3)?,
    })
}

fn load_row(conn: &Connection, id: Uuid) -> Result<Option<RawEntry>> {
    Ok(conn
        .query_row(
            "SELECT id, saved_at, note, payload FROM reading WHERE id = ?1",
            params![id.to_string()],
            raw_entry,
        )
        .optional()?)
}

fn decode(raw: RawEntry) -> Result<HistoryEntry> {
    let id = raw
        .id
        .parse::<Uuid>()
        .map_err(|e| StorageError::Corrupt(format!("invalid reading id: {e}")))?;
    let saved_at = raw
        .saved_at
        .parse::<Timestamp>()
        .map_err(|e| StorageError::Corrupt(format!("invalid saved_at: {e}")))?;
    let reading = serde_json::from_str(&raw.payload)
        .map_err(|e| StorageError::Corrupt(format!("invalid payload for {id}: {e}")))?;
    Ok(HistoryEntry {
        id,
        saved_at,
        note: raw.note,
        reading,
    })
}
