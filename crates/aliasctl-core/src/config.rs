//! Tool configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the alias database lives unless `--db` says otherwise.
pub const DEFAULT_DATABASE_PATH: &str = "/var/lib/kc-policy/aliases.db";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Tracing filter directive for stderr diagnostics
    pub log_level: String,
}

impl Config {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            database_path,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.database_path = path;
        }
        self
    }

    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.log_level = level;
        }
        self
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_DATABASE_PATH))
    }
}
