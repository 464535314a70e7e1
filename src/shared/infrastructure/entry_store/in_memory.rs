// In memory implementation of the EntryStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep entries ordered by their store-assigned id.
// - Hand out monotonic ids and group ids.

use crate::modules::time_entries::core::entry::TimeEntry;
use crate::shared::infrastructure::entry_store::{EntryStore, EntryStoreError};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemoryEntryStore {
    entries: RwLock<BTreeMap<i64, TimeEntry>>,
    next_id: AtomicI64,
    next_group_id: AtomicI64,
    delay_save_ms: AtomicU64,
    is_offline: bool,
}

impl Default for InMemoryEntryStore {
    fn default() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            next_group_id: AtomicI64::new(1),
            delay_save_ms: AtomicU64::new(0),
            is_offline: false,
        }
    }
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    fn ensure_online(&self) -> Result<(), EntryStoreError> {
        if self.is_offline {
            return Err(EntryStoreError::Backend("Entry store offline".into()));
        }
        Ok(())
    }

    async fn filter<F>(&self, predicate: F) -> Result<Vec<TimeEntry>, EntryStoreError>
    where
        F: Fn(&TimeEntry) -> bool + Send,
    {
        self.ensure_online()?;
        let guard = self.entries.read().await;
        Ok(guard.values().filter(|e| predicate(e)).cloned().collect())
    }
}

fn within(entry: &TimeEntry, start: NaiveDate, end: NaiveDate) -> bool {
    entry
        .work_date
        .is_some_and(|work_date| work_date >= start && work_date <= end)
}

#[async_trait::async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn find_by_group_id(&self, group_id: i64) -> Result<Vec<TimeEntry>, EntryStoreError> {
        self.filter(|e| e.group_id == Some(group_id)).await
    }

    async fn find_by_user_and_date_range(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>, EntryStoreError> {
        self.filter(|e| e.user_id == user_id && within(e, start, end))
            .await
    }

    async fn find_by_client_and_date_range(
        &self,
        client: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>, EntryStoreError> {
        self.filter(|e| e.client == client && within(e, start, end))
            .await
    }

    async fn find_by_user_set_and_date_range(
        &self,
        user_ids: &[i64],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>, EntryStoreError> {
        self.filter(|e| user_ids.contains(&e.user_id) && within(e, start, end))
            .await
    }

    async fn find_by_client_and_user_set_and_date_range(
        &self,
        client: &str,
        user_ids: &[i64],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>, EntryStoreError> {
        self.filter(|e| {
            e.client == client && user_ids.contains(&e.user_id) && within(e, start, end)
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TimeEntry>, EntryStoreError> {
        self.ensure_online()?;
        Ok(self.entries.read().await.get(&id).cloned())
    }

    async fn find_by_ticket(&self, ticket: &str) -> Result<Vec<TimeEntry>, EntryStoreError> {
        self.filter(|e| e.ticket.as_deref() == Some(ticket)).await
    }

    async fn allocate_group_id(&self) -> Result<i64, EntryStoreError> {
        self.ensure_online()?;
        Ok(self.next_group_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn save(&self, mut entry: TimeEntry) -> Result<TimeEntry, EntryStoreError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let id = match entry.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        entry.id = Some(id);
        if let Some(group_id) = entry.group_id {
            // Never hand out a group id the store already holds.
            self.next_group_id.fetch_max(group_id + 1, Ordering::SeqCst);
        }

        let mut guard = self.entries.write().await;
        guard.insert(id, entry.clone());
        Ok(entry)
    }
}
