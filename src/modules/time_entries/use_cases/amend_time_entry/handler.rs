use std::sync::Arc;

use tracing::info;

use crate::modules::time_entries::core::entry::TimeEntry;
use crate::modules::time_entries::core::errors::ApplicationError;
use crate::modules::time_entries::use_cases::amend_time_entry::command::AmendTimeEntry;
use crate::modules::time_entries::use_cases::amend_time_entry::decide::decide_amend;
use crate::shared::core::group_locks::GroupLocks;
use crate::shared::infrastructure::entry_store::EntryStore;

pub struct AmendTimeEntryHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    store: Arc<TStore>,
    group_locks: Arc<GroupLocks>,
}

impl<TStore> AmendTimeEntryHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    pub fn new(store: Arc<TStore>, group_locks: Arc<GroupLocks>) -> Self {
        Self { store, group_locks }
    }

    pub async fn handle(
        &self,
        id: i64,
        command: AmendTimeEntry,
    ) -> Result<TimeEntry, ApplicationError> {
        let entry = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("time entry {id}")))?;

        let amended = match entry.group_id {
            Some(group_id) => {
                self.group_locks
                    .run(group_id, self.amend_in_group(id, group_id, &command))
                    .await?
            }
            None => self.store.save(decide_amend(entry, &command, &[])?).await?,
        };

        info!(id, group_id = ?amended.group_id, date = %amended.date, "time entry amended");
        Ok(amended)
    }

    async fn amend_in_group(
        &self,
        id: i64,
        group_id: i64,
        command: &AmendTimeEntry,
    ) -> Result<TimeEntry, ApplicationError> {
        // Re-read under the lock; a reconciliation may have run in between.
        let group = self.store.find_by_group_id(group_id).await?;
        let (mut own, siblings): (Vec<_>, Vec<_>) =
            group.into_iter().partition(|e| e.id == Some(id));
        let entry = own
            .pop()
            .ok_or_else(|| ApplicationError::NotFound(format!("time entry {id}")))?;
        let sibling_dates: Vec<String> = siblings.into_iter().map(|e| e.date).collect();

        let amended = decide_amend(entry, command, &sibling_dates)?;
        Ok(self.store.save(amended).await?)
    }
}
