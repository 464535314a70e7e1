use std::sync::Arc;

use indexmap::IndexSet;
use serde::Serialize;
use tracing::info;

use crate::modules::time_entries::core::entry::TimeEntry;
use crate::modules::time_entries::core::errors::ApplicationError;
use crate::shared::core::group_locks::GroupLocks;
use crate::shared::infrastructure::entry_store::EntryStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketDescriptionLookup {
    pub ticket: String,
    pub exists: bool,
    pub ticket_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketDescriptionUpdate {
    pub ticket: String,
    pub updated: usize,
}

pub struct TicketDescriptionHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    store: Arc<TStore>,
    group_locks: Arc<GroupLocks>,
}

impl<TStore> TicketDescriptionHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    pub fn new(store: Arc<TStore>, group_locks: Arc<GroupLocks>) -> Self {
        Self { store, group_locks }
    }

    /// The most recently stored non-empty description of `ticket`.
    pub async fn lookup(&self, ticket: &str) -> Result<TicketDescriptionLookup, ApplicationError> {
        let ticket = require_ticket(ticket)?;
        let entries = self.store.find_by_ticket(ticket).await?;

        let ticket_description = entries
            .iter()
            .rev()
            .filter_map(|e| e.ticket_description.as_deref())
            .map(str::trim)
            .find(|d| !d.is_empty())
            .unwrap_or_default()
            .to_string();

        Ok(TicketDescriptionLookup {
            ticket: ticket.to_string(),
            exists: !entries.is_empty(),
            ticket_description,
        })
    }

    pub async fn update(
        &self,
        ticket: &str,
        description: &str,
    ) -> Result<TicketDescriptionUpdate, ApplicationError> {
        let ticket = require_ticket(ticket)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(ApplicationError::Validation(
                "ticket_description is required".into(),
            ));
        }

        let entries = self.store.find_by_ticket(ticket).await?;
        if entries.is_empty() {
            return Err(ApplicationError::NotFound(format!("ticket {ticket}")));
        }

        // Grouped entries are rewritten whole, so each group is re-read and
        // saved under its lock.
        let group_ids: IndexSet<i64> = entries.iter().filter_map(|e| e.group_id).collect();
        let ungrouped: Vec<TimeEntry> = entries
            .into_iter()
            .filter(|e| e.group_id.is_none())
            .collect();

        let mut updated = self.describe(ungrouped, description).await?;
        for group_id in group_ids {
            updated += self
                .group_locks
                .run(group_id, self.describe_group(group_id, ticket, description))
                .await?;
        }

        info!(ticket, updated, "ticket description updated");
        Ok(TicketDescriptionUpdate {
            ticket: ticket.to_string(),
            updated,
        })
    }
}

impl<TStore> TicketDescriptionHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    async fn describe_group(
        &self,
        group_id: i64,
        ticket: &str,
        description: &str,
    ) -> Result<usize, ApplicationError> {
        let group = self.store.find_by_group_id(group_id).await?;
        let matching = group
            .into_iter()
            .filter(|e| e.ticket.as_deref() == Some(ticket))
            .collect();
        self.describe(matching, description).await
    }

    async fn describe(
        &self,
        mut entries: Vec<TimeEntry>,
        description: &str,
    ) -> Result<usize, ApplicationError> {
        if entries.is_empty() {
            return Ok(0);
        }
        for entry in &mut entries {
            entry.ticket_description = Some(description.to_string());
        }
        Ok(self.store.save_all(entries).await?.len())
    }
}

fn require_ticket(ticket: &str) -> Result<&str, ApplicationError> {
    let ticket = ticket.trim();
    if ticket.is_empty() {
        return Err(ApplicationError::Validation("ticket is required".into()));
    }
    Ok(ticket)
}
