//! aliasctl core
//!
//! Alias records and the operations an administrator runs against them:
//! add (upsert), delete, disable and list, plus owner lookups.

mod alias;
mod config;
mod error;
mod store;

pub use alias::{normalize_email, normalize_username, Alias, AliasStatus};
pub use config::{Config, DEFAULT_DATABASE_PATH, DEFAULT_LOG_LEVEL};
pub use error::CoreError;
pub use store::AliasStore;

pub use aliasctl_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging.
///
/// Diagnostics go to stderr so that command output on stdout stays clean.
/// An unparsable `level` falls back to the default.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
