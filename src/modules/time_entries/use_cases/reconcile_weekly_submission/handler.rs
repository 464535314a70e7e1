use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::modules::time_entries::core::entry::UserRef;
use crate::modules::time_entries::core::errors::ApplicationError;
use crate::modules::time_entries::use_cases::reconcile_weekly_submission::{
    command::WeeklySubmission,
    decide::{RowContext, decide_reconcile},
    decision::ReconciliationResult,
};
use crate::shared::core::group_locks::GroupLocks;
use crate::shared::infrastructure::entry_store::EntryStore;
use crate::shared::infrastructure::user_directory::UserDirectory;

struct RowOutcome {
    inserted: usize,
    updated: usize,
    change_log: Vec<String>,
}

pub struct ReconcileWeeklySubmissionHandler<TStore, TDirectory>
where
    TStore: EntryStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    group_locks: Arc<GroupLocks>,
}

impl<TStore, TDirectory> ReconcileWeeklySubmissionHandler<TStore, TDirectory>
where
    TStore: EntryStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    pub fn new(store: Arc<TStore>, directory: Arc<TDirectory>) -> Self {
        Self {
            store,
            directory,
            group_locks: Arc::new(GroupLocks::new()),
        }
    }

    /// Shares group locks with other handlers that write the same groups.
    pub fn with_group_locks(mut self, group_locks: Arc<GroupLocks>) -> Self {
        self.group_locks = group_locks;
        self
    }

    /// Reconciles a batch of weekly rows. Users are resolved before anything is
    /// written; rows then run concurrently and each commits on its own, so a
    /// failing row leaves the rows that already committed in place.
    pub async fn handle(
        &self,
        submissions: Vec<WeeklySubmission>,
    ) -> Result<ReconciliationResult, ApplicationError> {
        if submissions.is_empty() {
            return Err(ApplicationError::Validation(
                "submission batch cannot be empty".into(),
            ));
        }

        let users = self.resolve_users(&submissions).await?;

        let rows = submissions
            .iter()
            .zip(&users)
            .map(|(submission, user)| self.reconcile_row(submission, user));
        let outcomes = join_all(rows).await;

        let mut inserted = 0;
        let mut updated = 0;
        let mut change_log = Vec::new();
        let mut first_error = None;
        for outcome in outcomes {
            match outcome {
                Ok(row) => {
                    inserted += row.inserted;
                    updated += row.updated;
                    change_log.extend(row.change_log);
                }
                Err(err) if first_error.is_none() => first_error = Some(err),
                Err(err) => warn!(error = %err, "additional weekly row failed"),
            }
        }

        if let Some(err) = first_error {
            warn!(
                error = %err,
                committed_inserts = inserted,
                committed_updates = updated,
                "weekly submission partially applied"
            );
            return Err(err);
        }

        let result = ReconciliationResult::new(inserted, updated, change_log);
        info!(
            inserted = result.inserted,
            updated = result.updated,
            outcome = ?result.outcome,
            "weekly submissions reconciled"
        );
        Ok(result)
    }

    async fn resolve_users(
        &self,
        submissions: &[WeeklySubmission],
    ) -> Result<Vec<UserRef>, ApplicationError> {
        let mut known: HashMap<String, UserRef> = HashMap::new();
        let mut users = Vec::with_capacity(submissions.len());
        for submission in submissions {
            let key = submission.email.to_lowercase();
            let user = match known.get(&key) {
                Some(user) => user.clone(),
                None => {
                    let user = self
                        .directory
                        .find_by_email(&submission.email)
                        .await?
                        .ok_or_else(|| {
                            ApplicationError::NotFound(format!("user {}", submission.email))
                        })?;
                    known.insert(key, user.clone());
                    user
                }
            };
            users.push(user);
        }
        Ok(users)
    }

    async fn reconcile_row(
        &self,
        submission: &WeeklySubmission,
        user: &UserRef,
    ) -> Result<RowOutcome, ApplicationError> {
        let group_id = match submission.group_id {
            Some(group_id) => group_id,
            None => self.store.allocate_group_id().await?,
        };

        self.group_locks
            .run(group_id, self.apply_row(group_id, submission, user))
            .await
    }

    async fn apply_row(
        &self,
        group_id: i64,
        submission: &WeeklySubmission,
        user: &UserRef,
    ) -> Result<RowOutcome, ApplicationError> {
        let existing = self.store.find_by_group_id(group_id).await?;

        let context = RowContext {
            group_id,
            user,
            submission,
        };
        let plan = decide_reconcile(context, existing);
        debug!(
            group_id,
            updates = plan.updates.len(),
            inserts = plan.inserts.len(),
            "weekly row planned"
        );

        let outcome = RowOutcome {
            inserted: plan.inserts.len(),
            updated: plan.updates.len(),
            change_log: plan.change_log(),
        };
        let entries = plan.into_entries();
        if !entries.is_empty() {
            self.store.save_all(entries).await?;
        }
        Ok(outcome)
    }
}
