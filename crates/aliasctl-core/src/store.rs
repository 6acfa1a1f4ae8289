//! Alias store
//!
//! Every address is normalized before it touches SQL, so lookups and writes
//! agree on the key regardless of how the caller spelled it.

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use std::path::Path;

use aliasctl_storage::Database;

use crate::alias::{normalize_email, normalize_username, Alias};
use crate::error::CoreError;
use crate::Result;

const SELECT_COLUMNS: &str = "SELECT alias_email, username, enabled, updated_at FROM aliases";

pub struct AliasStore {
    db: Database,
}

impl AliasStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Database::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Insert the alias, or take it over if it already exists: the owner is
    /// replaced, the alias is re-enabled and its timestamp refreshed.
    pub fn upsert(&self, alias_email: &str, username: &str) -> Result<()> {
        let alias_email = normalize_email(alias_email);
        let username = normalize_username(username);
        if alias_email.is_empty() {
            return Err(CoreError::EmptyAliasEmail);
        }
        if username.is_empty() {
            return Err(CoreError::EmptyUsername);
        }

        let now = Utc::now().timestamp();
        self.db.transaction(|conn| {
            conn.execute(
                "INSERT INTO aliases (alias_email, username, enabled, updated_at)
                 VALUES (?1, ?2, 1, ?3)
                 ON CONFLICT(alias_email) DO UPDATE SET
                    username = excluded.username,
                    enabled = 1,
                    updated_at = excluded.updated_at",
                params![alias_email, username, now],
            )?;
            Ok(())
        })?;

        tracing::debug!(alias = %alias_email, username = %username, updated_at = now, "Upserted alias");

        Ok(())
    }

    /// Remove the alias. Returns whether a row was removed; a missing alias
    /// is not an error.
    pub fn delete(&self, alias_email: &str) -> Result<bool> {
        let alias_email = normalize_email(alias_email);

        let removed = self.db.transaction(|conn| {
            Ok(conn.execute("DELETE FROM aliases WHERE alias_email = ?1", [&alias_email])?)
        })?;

        tracing::debug!(alias = %alias_email, removed, "Deleted alias");

        Ok(removed > 0)
    }

    /// Mark the alias disabled, keeping its owner. Returns whether a row was
    /// updated; a missing alias is not an error.
    pub fn disable(&self, alias_email: &str) -> Result<bool> {
        let alias_email = normalize_email(alias_email);
        let now = Utc::now().timestamp();

        let updated = self.db.transaction(|conn| {
            Ok(conn.execute(
                "UPDATE aliases SET enabled = 0, updated_at = ?1 WHERE alias_email = ?2",
                params![now, alias_email],
            )?)
        })?;

        tracing::debug!(alias = %alias_email, updated, "Disabled alias");

        Ok(updated > 0)
    }

    /// All aliases ordered by owner then address, or one owner's aliases
    /// ordered by address. The owner filter is matched exactly as given; an
    /// empty filter lists everything.
    pub fn list(&self, username: Option<&str>) -> Result<Vec<Alias>> {
        let aliases = self.db.with_connection(|conn| {
            let aliases = match username.filter(|u| !u.is_empty()) {
                Some(username) => {
                    let mut stmt = conn.prepare(&format!(
                        "{SELECT_COLUMNS} WHERE username = ?1 ORDER BY alias_email"
                    ))?;
                    let rows = stmt.query_map([username], alias_from_row)?;
                    rows.collect::<rusqlite::Result<Vec<_>>>()?
                }
                None => {
                    let mut stmt = conn.prepare(&format!(
                        "{SELECT_COLUMNS} ORDER BY username, alias_email"
                    ))?;
                    let rows = stmt.query_map([], alias_from_row)?;
                    rows.collect::<rusqlite::Result<Vec<_>>>()?
                }
            };
            Ok(aliases)
        })?;

        tracing::debug!(username = ?username, count = aliases.len(), "Listed aliases");

        Ok(aliases)
    }

    /// The stored row for an address, enabled or not.
    pub fn get(&self, alias_email: &str) -> Result<Option<Alias>> {
        let alias_email = normalize_email(alias_email);

        let alias = self.db.with_connection(|conn| {
            let alias = conn
                .query_row(
                    &format!("{SELECT_COLUMNS} WHERE alias_email = ?1"),
                    [&alias_email],
                    alias_from_row,
                )
                .optional()?;
            Ok(alias)
        })?;

        Ok(alias)
    }

    /// Owner of an enabled alias. Disabled and unknown aliases have none.
    pub fn owner(&self, alias_email: &str) -> Result<Option<String>> {
        Ok(self
            .get(alias_email)?
            .filter(|alias| alias.enabled)
            .map(|alias| alias.username))
    }

    /// True when the alias is enabled and owned by `username`.
    pub fn belongs_to(&self, alias_email: &str, username: &str) -> Result<bool> {
        let username = normalize_username(username);
        Ok(self.owner(alias_email)?.is_some_and(|owner| owner == username))
    }

    pub fn close(self) -> Result<()> {
        self.db.close()?;
        Ok(())
    }
}

fn alias_from_row(row: &Row<'_>) -> rusqlite::Result<Alias> {
    Ok(Alias {
        alias_email: row.get(0)?,
        username: row.get(1)?,
        enabled: row.get::<_, i64>(2)? != 0,
        updated_at: row.get(3)?,
    })
}
