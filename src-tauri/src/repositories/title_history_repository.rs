// TitleHistoryRepository - タイトル履歴の永続化を担当
// 重複排除はこの層の責務

use anyhow::{anyhow, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::config::history;
use crate::database::TitleHistoryEntry;

/// タイトル履歴操作の責務を持つRepository trait
pub trait TitleHistoryRepository {
    /// Inserts a new title or bumps the use count of an existing one
    fn record(&self, title: &str) -> Result<TitleHistoryEntry>;
    fn find_by_title(&self, title: &str) -> Result<Option<TitleHistoryEntry>>;
    fn find_all(&self) -> Result<Vec<TitleHistoryEntry>>;
    fn search_prefix(&self, prefix: &str, limit: usize) -> Result<Vec<TitleHistoryEntry>>;
    fn remove(&self, title: &str) -> Result<bool>;
    fn clear(&self) -> Result<usize>;
}

/// SQLite実装のTitleHistoryRepository
pub struct SqliteTitleHistoryRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteTitleHistoryRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

const SELECT_COLUMNS: &str = "SELECT id, title, use_count, created_at, last_used_at FROM title_history";

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<TitleHistoryEntry> {
    Ok(TitleHistoryEntry {
        id: row.get(0)?,
        title: row.get(1)?,
        use_count: row.get(2)?,
        created_at: row.get(3)?,
        last_used_at: row.get(4)?,
    })
}

/// LIKE のワイルドカードをエスケープ
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

impl<'a> TitleHistoryRepository for SqliteTitleHistoryRepository<'a> {
    fn record(&self, title: &str) -> Result<TitleHistoryEntry> {
        let title = title.trim();
        // 空文字列や空白のみのタイトルは許可しない
        if title.is_empty() {
            return Err(anyhow!("タイトルは空にできません"));
        }

        self.conn.execute(
            "INSERT INTO title_history
                (title, title_folded, use_count, last_used_seq, created_at, last_used_at)
             VALUES (
                ?1, ?2, ?3,
                (SELECT COALESCE(MAX(last_used_seq), 0) + 1 FROM title_history),
                datetime('now'), datetime('now')
             )
             ON CONFLICT(title) DO UPDATE SET
                use_count = use_count + 1,
                title_folded = excluded.title_folded,
                last_used_seq = excluded.last_used_seq,
                last_used_at = excluded.last_used_at",
            params![title, title.to_lowercase(), history::INITIAL_USE_COUNT],
        )?;

        self.find_by_title(title)?
            .ok_or_else(|| anyhow!("Failed to retrieve recorded title"))
    }

    fn find_by_title(&self, title: &str) -> Result<Option<TitleHistoryEntry>> {
        let entry = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE title = ?1"),
                [title],
                row_to_entry,
            )
            .optional()?;
        Ok(entry)
    }

    fn find_all(&self) -> Result<Vec<TitleHistoryEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY last_used_seq DESC"))?;

        let entry_iter = stmt.query_map([], row_to_entry)?;

        let mut entries = Vec::new();
        for entry in entry_iter {
            entries.push(entry?);
        }
        Ok(entries)
    }

    fn search_prefix(&self, prefix: &str, limit: usize) -> Result<Vec<TitleHistoryEntry>> {
        // Matched against the Unicode-folded column; LIKE alone folds ASCII only
        let pattern = format!("{}%", escape_like(&prefix.trim_start().to_lowercase()));
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_COLUMNS} WHERE title_folded LIKE ?1 ESCAPE '\\'
             ORDER BY last_used_seq DESC LIMIT ?2"
        ))?;

        let entry_iter = stmt.query_map(params![pattern, limit], row_to_entry)?;

        let mut entries = Vec::new();
        for entry in entry_iter {
            entries.push(entry?);
        }
        Ok(entries)
    }

    fn remove(&self, title: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM title_history WHERE title = ?1", [title.trim()])?;
        Ok(removed > 0)
    }

    fn clear(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM title_history", [])?)
    }
}
