use crate::modules::time_entries::core::entry::UserRef;
use crate::modules::time_entries::core::errors::ApplicationError;
use crate::modules::time_entries::use_cases::amend_time_entry::handler::AmendTimeEntryHandler;
use crate::modules::time_entries::use_cases::get_horizon::handler::GetHorizonHandler;
use crate::modules::time_entries::use_cases::get_rollup::handler::GetRollupHandler;
use crate::modules::time_entries::use_cases::list_entries_by_range::handler::ListEntriesByRangeHandler;
use crate::modules::time_entries::use_cases::reconcile_weekly_submission::handler::ReconcileWeeklySubmissionHandler;
use crate::modules::time_entries::use_cases::ticket_description::handler::TicketDescriptionHandler;
use crate::shared::core::group_locks::GroupLocks;
use crate::shared::infrastructure::entry_store::in_memory::InMemoryEntryStore;
use crate::shared::infrastructure::user_directory::UserDirectory;
use crate::shared::infrastructure::user_directory::in_memory::InMemoryUserDirectory;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryEntryStore>,
    pub directory: Arc<InMemoryUserDirectory>,
    pub reconcile_handler:
        Arc<ReconcileWeeklySubmissionHandler<InMemoryEntryStore, InMemoryUserDirectory>>,
    pub horizon_handler: Arc<GetHorizonHandler<InMemoryEntryStore>>,
    pub rollup_handler: Arc<GetRollupHandler<InMemoryEntryStore, InMemoryUserDirectory>>,
    pub list_handler: Arc<ListEntriesByRangeHandler<InMemoryEntryStore>>,
    pub amend_handler: Arc<AmendTimeEntryHandler<InMemoryEntryStore>>,
    pub ticket_description_handler: Arc<TicketDescriptionHandler<InMemoryEntryStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryEntryStore>, directory: Arc<InMemoryUserDirectory>) -> Self {
        let group_locks = Arc::new(GroupLocks::new());
        Self {
            reconcile_handler: Arc::new(
                ReconcileWeeklySubmissionHandler::new(store.clone(), directory.clone())
                    .with_group_locks(group_locks.clone()),
            ),
            horizon_handler: Arc::new(GetHorizonHandler::new(store.clone())),
            rollup_handler: Arc::new(GetRollupHandler::new(store.clone(), directory.clone())),
            list_handler: Arc::new(ListEntriesByRangeHandler::new(store.clone())),
            amend_handler: Arc::new(AmendTimeEntryHandler::new(
                store.clone(),
                group_locks.clone(),
            )),
            ticket_description_handler: Arc::new(TicketDescriptionHandler::new(
                store.clone(),
                group_locks,
            )),
            store,
            directory,
        }
    }

    pub fn in_memory(users: impl IntoIterator<Item = UserRef>) -> Self {
        Self::with_store(InMemoryEntryStore::new(), users)
    }

    pub fn with_store(store: InMemoryEntryStore, users: impl IntoIterator<Item = UserRef>) -> Self {
        Self::new(
            Arc::new(store),
            Arc::new(InMemoryUserDirectory::with_users(users)),
        )
    }

    /// Resolves the user an inbound request names by email.
    pub async fn resolve_user(&self, email: Option<&str>) -> Result<UserRef, ApplicationError> {
        let email = email
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or_else(|| ApplicationError::Validation("email is required".into()))?;
        self.directory
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("user {email}")))
    }
}
