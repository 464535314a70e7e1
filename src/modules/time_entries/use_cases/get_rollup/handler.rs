use std::sync::Arc;

use tracing::debug;

use crate::modules::time_entries::core::errors::ApplicationError;
use crate::modules::time_entries::core::work_date::require_range;
use crate::modules::time_entries::use_cases::get_rollup::filter::{RollupFilter, RollupScope};
use crate::modules::time_entries::use_cases::get_rollup::projection::{
    RollupSummary, project_rollup,
};
use crate::shared::infrastructure::entry_store::EntryStore;
use crate::shared::infrastructure::user_directory::UserDirectory;

pub struct GetRollupHandler<TStore, TDirectory>
where
    TStore: EntryStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
}

impl<TStore, TDirectory> GetRollupHandler<TStore, TDirectory>
where
    TStore: EntryStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    pub fn new(store: Arc<TStore>, directory: Arc<TDirectory>) -> Self {
        Self { store, directory }
    }

    pub async fn handle(&self, filter: RollupFilter) -> Result<Vec<RollupSummary>, ApplicationError> {
        let RollupFilter { scope, start, end } = filter;
        require_range(start, end)?;

        let entries = match scope {
            RollupScope::Client(client) => {
                self.store
                    .find_by_client_and_date_range(&client.to_uppercase(), start, end)
                    .await?
            }
            RollupScope::Users(emails) => {
                let user_ids = self.directory.find_user_ids_by_emails(&emails).await?;
                if user_ids.is_empty() {
                    debug!(?emails, "no known users for rollup");
                    return Ok(Vec::new());
                }
                self.store
                    .find_by_user_set_and_date_range(&user_ids, start, end)
                    .await?
            }
            RollupScope::ClientAndUsers { client, emails } => {
                let user_ids = self.directory.find_user_ids_by_emails(&emails).await?;
                if user_ids.is_empty() {
                    debug!(?emails, "no known users for rollup");
                    return Ok(Vec::new());
                }
                self.store
                    .find_by_client_and_user_set_and_date_range(
                        &client.to_uppercase(),
                        &user_ids,
                        start,
                        end,
                    )
                    .await?
            }
        };

        debug!(entries = entries.len(), "building rollup");
        Ok(project_rollup(entries))
    }
}
