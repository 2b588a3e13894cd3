//! SQLite-backed content store.

use super::traits::{ContentStore, DataQuery};
use crate::error::{Result, ShortcutError};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Content store keeping provider rows in a single SQLite table.
///
/// Rows are keyed by content address and `_id`, mirroring the provider
/// tables the resolver knows how to query. Thread-safe via an internal mutex
/// on the connection.
pub struct SqliteContentStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteContentStore {
    /// Open (or create) a store at the given database path.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ShortcutError::Io {
                message: format!("Failed to create store directory: {}", e),
                path: Some(parent.to_path_buf()),
                source: Some(e),
            })?;
        }

        let conn = Connection::open(db_path).map_err(|e| ShortcutError::Database {
            message: format!("Failed to open content store: {}", e),
            source: Some(e),
        })?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")
            .map_err(|e| ShortcutError::Database {
                message: format!("Failed to set pragmas: {}", e),
                source: Some(e),
            })?;

        Self::with_connection(conn)
    }

    /// Open a store that lives only in memory.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| ShortcutError::Database {
            message: format!("Failed to lock database: {}", e),
            source: None,
        })
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.lock()?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS content_rows (
                address TEXT NOT NULL,
                _id INTEGER NOT NULL,
                _data TEXT,
                PRIMARY KEY (address, _id)
            );
            "#,
        )
        .map_err(|e| ShortcutError::Database {
            message: format!("Failed to initialize content store schema: {}", e),
            source: Some(e),
        })?;

        Ok(())
    }

    /// Insert or replace a row.
    pub fn upsert_row(&self, address: &str, row_id: i64, data: Option<&str>) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO content_rows (address, _id, _data) VALUES (?1, ?2, ?3)",
            params![address, row_id, data],
        )?;
        Ok(())
    }
}

impl ContentStore for SqliteContentStore {
    fn query_data_column(&self, query: &DataQuery) -> Result<Option<String>> {
        let conn = self.lock()?;

        // query_row finalizes its statement before returning
        let value: Option<Option<String>> = match query.row_id {
            Some(row_id) => conn
                .query_row(
                    "SELECT _data FROM content_rows WHERE address = ?1 AND _id = ?2 LIMIT 1",
                    params![query.address, row_id],
                    |row| row.get(0),
                )
                .optional()?,
            None => conn
                .query_row(
                    "SELECT _data FROM content_rows WHERE address = ?1 ORDER BY _id LIMIT 1",
                    params![query.address],
                    |row| row.get(0),
                )
                .optional()?,
        };

        debug!("Content store lookup {} -> {:?}", query, value);

        Ok(value.flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lookup_by_id() {
        let store = SqliteContentStore::open_in_memory().unwrap();
        store
            .upsert_row("content://downloads/public_downloads", 5, Some("/sdcard/Download/a.zip"))
            .unwrap();
        store
            .upsert_row("content://downloads/public_downloads", 6, Some("/sdcard/Download/b.zip"))
            .unwrap();

        let value = store
            .query_data_column(&DataQuery::by_id("content://downloads/public_downloads", 6))
            .unwrap();
        assert_eq!(value.as_deref(), Some("/sdcard/Download/b.zip"));
    }

    #[test]
    fn test_first_row_is_lowest_id() {
        let store = SqliteContentStore::open_in_memory().unwrap();
        store.upsert_row("content://com.example/files", 9, Some("/b")).unwrap();
        store.upsert_row("content://com.example/files", 2, Some("/a")).unwrap();

        let value = store
            .query_data_column(&DataQuery::first_row("content://com.example/files"))
            .unwrap();
        assert_eq!(value.as_deref(), Some("/a"));
    }

    #[test]
    fn test_missing_row_and_null_column() {
        let store = SqliteContentStore::open_in_memory().unwrap();
        store.upsert_row("content://media/external/images/media", 1, None).unwrap();

        assert_eq!(
            store
                .query_data_column(&DataQuery::by_id("content://media/external/images/media", 1))
                .unwrap(),
            None
        );
        assert_eq!(
            store
                .query_data_column(&DataQuery::by_id("content://media/external/images/media", 2))
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_on_disk_store_persists() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("content.db");

        {
            let store = SqliteContentStore::open(&db_path).unwrap();
            store.upsert_row("content://a", 1, Some("/persisted")).unwrap();
        }

        let store = SqliteContentStore::open(&db_path).unwrap();
        assert_eq!(
            store.query_data_column(&DataQuery::by_id("content://a", 1)).unwrap().as_deref(),
            Some("/persisted")
        );
    }
}
