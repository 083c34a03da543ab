use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::repositories::{SqliteTitleHistoryRepository, TitleHistoryRepository};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TitleHistoryEntry {
    pub id: i64,
    pub title: String,
    pub use_count: i64,
    pub created_at: String,
    pub last_used_at: String,
}

/// Creates the history table if it does not exist yet
pub(crate) fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS title_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT UNIQUE NOT NULL,
            title_folded TEXT NOT NULL DEFAULT '',
            use_count INTEGER NOT NULL DEFAULT 1,
            last_used_seq INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            last_used_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_title_history_last_used
         ON title_history (last_used_seq DESC)",
        [],
    )?;

    add_folded_title_column(conn)?;

    Ok(())
}

/// Adds `title_folded` to history files created before it existed and
/// fills it for every row. SQLite's `lower()` only folds ASCII, so the
/// folding happens here.
fn add_folded_title_column(conn: &Connection) -> rusqlite::Result<()> {
    let has_column: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM pragma_table_info('title_history') WHERE name = 'title_folded'",
        [],
        |row| row.get(0),
    )?;
    if has_column {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE title_history ADD COLUMN title_folded TEXT NOT NULL DEFAULT ''",
        [],
    )?;

    let titles = {
        let mut stmt = conn.prepare("SELECT id, title FROM title_history")?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()?
    };
    for (id, title) in titles {
        conn.execute(
            "UPDATE title_history SET title_folded = ?1 WHERE id = ?2",
            rusqlite::params![title.to_lowercase(), id],
        )?;
    }
    Ok(())
}

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(db_path: &Path) -> rusqlite::Result<Self> {
        let conn = Connection::open(db_path)?;
        create_schema(&conn)?;
        Ok(Database { conn })
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Database { conn })
    }

    fn titles(&self) -> SqliteTitleHistoryRepository<'_> {
        SqliteTitleHistoryRepository::new(&self.conn)
    }

    pub fn record_title(&self, title: &str) -> Result<TitleHistoryEntry> {
        self.titles().record(title)
    }

    pub fn get_title_history(&self) -> Result<Vec<TitleHistoryEntry>> {
        self.titles().find_all()
    }

    pub fn search_titles(&self, prefix: &str, limit: usize) -> Result<Vec<TitleHistoryEntry>> {
        self.titles().search_prefix(prefix, limit)
    }

    pub fn remove_title(&self, title: &str) -> Result<bool> {
        self.titles().remove(title)
    }

    pub fn clear_title_history(&self) -> Result<usize> {
        self.titles().clear()
    }

    pub fn get_title_count(&self) -> rusqlite::Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM title_history", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
