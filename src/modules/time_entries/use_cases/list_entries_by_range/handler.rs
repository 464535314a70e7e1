use std::sync::Arc;

use chrono::NaiveDate;

use crate::modules::time_entries::core::errors::ApplicationError;
use crate::modules::time_entries::core::work_date::require_range;
use crate::modules::time_entries::use_cases::list_entries_by_range::projection::TimeEntryView;
use crate::shared::infrastructure::entry_store::EntryStore;

pub struct ListEntriesByRangeHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListEntriesByRangeHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Raw per-date rows of one user, in store order.
    pub async fn handle(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntryView>, ApplicationError> {
        require_range(start, end)?;
        let entries = self
            .store
            .find_by_user_and_date_range(user_id, start, end)
            .await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
