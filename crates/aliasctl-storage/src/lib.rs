//! aliasctl storage layer
//!
//! Single-file SQLite persistence for alias records.
//! Every write goes through one committed transaction.

mod database;
mod error;
mod schema;

pub use database::{Database, MEMORY_PATH};
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
