//! Database connection and operations

use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use crate::schema::ensure_schema;
use crate::Result;

/// Path value that selects a private in-memory database.
pub const MEMORY_PATH: &str = ":memory:";

pub struct Database {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (creating if absent) the database file at `path`.
    ///
    /// Missing parent directories are created. The connection is switched to
    /// WAL journaling with `synchronous=NORMAL`, trading fsync-per-commit for
    /// write availability, and the schema is ensured before returning.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path == Path::new(MEMORY_PATH) {
            return Self::open_in_memory();
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tracing::info!(dir = %parent.display(), "Creating database directory");
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // WAL lets readers proceed while a single writer commits
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        ensure_schema(&conn)?;

        tracing::info!(path = %path.display(), journal_mode = %mode, "Database ready");

        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        ensure_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Backing file, or `None` for an in-memory database.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// Run `f` inside a transaction. The transaction commits only if `f`
    /// succeeds; otherwise it is rolled back when dropped.
    pub fn transaction<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let result = f(&tx)?;
        tx.commit()?;
        Ok(result)
    }

    pub fn journal_mode(&self) -> Result<String> {
        self.with_connection(|conn| {
            let mode = conn.query_row("PRAGMA journal_mode", [], |row| row.get(0))?;
            Ok(mode)
        })
    }

    /// Release the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        let conn = self.conn.into_inner();
        conn.close().map_err(|(_, e)| e)?;
        tracing::debug!("Database closed");
        Ok(())
    }
}
