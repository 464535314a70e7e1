use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::time_entries::core::entry::TimeEntry;

#[derive(Debug, Error)]
pub enum EntryStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Query and upsert primitives the time entry core needs from storage.
///
/// Range queries are inclusive on both ends and match on the derived work date.
/// Every query returns entries in store id order.
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn find_by_group_id(&self, group_id: i64) -> Result<Vec<TimeEntry>, EntryStoreError>;

    async fn find_by_user_and_date_range(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>, EntryStoreError>;

    async fn find_by_client_and_date_range(
        &self,
        client: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>, EntryStoreError>;

    async fn find_by_user_set_and_date_range(
        &self,
        user_ids: &[i64],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>, EntryStoreError>;

    async fn find_by_client_and_user_set_and_date_range(
        &self,
        client: &str,
        user_ids: &[i64],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>, EntryStoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<TimeEntry>, EntryStoreError>;

    async fn find_by_ticket(&self, ticket: &str) -> Result<Vec<TimeEntry>, EntryStoreError>;

    async fn allocate_group_id(&self) -> Result<i64, EntryStoreError>;

    /// Inserts when `entry.id` is `None`, replaces the stored entry otherwise.
    async fn save(&self, entry: TimeEntry) -> Result<TimeEntry, EntryStoreError>;

    async fn save_all(&self, entries: Vec<TimeEntry>) -> Result<Vec<TimeEntry>, EntryStoreError> {
        let mut saved = Vec::with_capacity(entries.len());
        for entry in entries {
            saved.push(self.save(entry).await?);
        }
        Ok(saved)
    }
}

pub mod in_memory;
