use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::modules::time_entries::core::errors::ApplicationError;
use crate::modules::time_entries::core::work_date::require_range;
use crate::modules::time_entries::use_cases::get_horizon::projection::{
    MergedEffort, project_horizon,
};
use crate::shared::infrastructure::entry_store::EntryStore;

pub struct GetHorizonHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetHorizonHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MergedEffort>, ApplicationError> {
        require_range(start, end)?;
        let entries = self
            .store
            .find_by_user_and_date_range(user_id, start, end)
            .await?;
        debug!(user_id, entries = entries.len(), "building horizon");
        Ok(project_horizon(entries))
    }
}
