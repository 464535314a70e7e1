use async_trait::async_trait;
use thiserror::Error;

use crate::modules::time_entries::core::entry::UserRef;

#[derive(Debug, Error)]
pub enum UserDirectoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Resolves user identities. Account management lives outside this service.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRef>, UserDirectoryError>;

    /// Ids of the known users among `emails`; unknown emails are skipped.
    async fn find_user_ids_by_emails(
        &self,
        emails: &[String],
    ) -> Result<Vec<i64>, UserDirectoryError>;
}

pub mod in_memory;
