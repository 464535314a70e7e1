use thiserror::Error;

use crate::shared::infrastructure::entry_store::EntryStoreError;
use crate::shared::infrastructure::user_directory::UserDirectoryError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("malformed data: {0}")]
    MalformedData(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Store(#[from] EntryStoreError),

    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
}
