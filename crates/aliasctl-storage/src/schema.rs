//! Table definitions
//!
//! Creation is idempotent and runs on every open. There is no version
//! tracking: the layout is fixed.

use crate::Result;
use rusqlite::Connection;

pub(crate) const ALIASES_TABLE: &str = "aliases";

pub fn ensure_schema(conn: &Connection) -> Result<()> {
    tracing::debug!(table = ALIASES_TABLE, "Ensuring schema");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS aliases (
            alias_email TEXT PRIMARY KEY,
            username    TEXT NOT NULL,
            enabled     INTEGER NOT NULL DEFAULT 1,
            updated_at  INTEGER NOT NULL DEFAULT (strftime('%s','now'))
        );

        CREATE INDEX IF NOT EXISTS idx_aliases_username ON aliases(username);
    "#,
    )?;

    Ok(())
}
