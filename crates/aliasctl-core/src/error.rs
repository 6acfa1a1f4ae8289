//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] aliasctl_storage::StorageError),

    #[error("Alias email cannot be empty")]
    EmptyAliasEmail,

    #[error("Username cannot be empty")]
    EmptyUsername,
}
