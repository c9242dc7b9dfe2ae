//! Key-value session storage
//!
//! Tokens outlive a single command, so they are kept in a small SQLite
//! table. Tests and `--no-persist` runs use the in-memory store instead.

use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// String key-value storage capability
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// SQLite-backed store, one row per key
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Open (and create if needed) the store at `db_path`
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            db_path: db_path.into(),
        };
        store.init()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn open_connection(&self) -> Result<Connection> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Connection::open(&self.db_path)?)
    }

    fn init(&self) -> Result<()> {
        let conn = self.open_connection()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS session_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            [],
        )?;

        debug!(path = %self.db_path.display(), "Session storage initialized");
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.open_connection()?;

        let value = conn
            .query_row(
                "SELECT value FROM session_storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.open_connection()?;

        conn.execute(
            r#"
            INSERT INTO session_storage (key, value, updated_at)
            VALUES (?1, ?2, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP
            "#,
            params![key, value],
        )?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.open_connection()?;
        conn.execute("DELETE FROM session_storage WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// Process-local store
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (SqliteStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("nested").join("session.db")).unwrap();
        (store, dir)
    }

    #[test]
    fn test_sqlite_set_and_get() {
        let (store, _dir) = create_test_store();
        store.set("access_token", "abc").unwrap();
        assert_eq!(store.get("access_token").unwrap().as_deref(), Some("abc"));
        assert_eq!(store.get("refresh_token").unwrap(), None);
    }

    #[test]
    fn test_sqlite_overwrite() {
        let (store, _dir) = create_test_store();
        store.set("access_token", "old").unwrap();
        store.set("access_token", "new").unwrap();
        assert_eq!(store.get("access_token").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_sqlite_remove() {
        let (store, _dir) = create_test_store();
        store.set("access_token", "abc").unwrap();
        store.remove("access_token").unwrap();
        store.remove("never_set").unwrap();
        assert_eq!(store.get("access_token").unwrap(), None);
    }

    #[test]
    fn test_sqlite_persists_across_handles() {
        let (store, _dir) = create_test_store();
        store.set("refresh_token", "r1").unwrap();

        let reopened = SqliteStore::open(store.path().to_path_buf()).unwrap();
        assert_eq!(reopened.get("refresh_token").unwrap().as_deref(), Some("r1"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
