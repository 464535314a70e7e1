use indexmap::IndexSet;
use serde::Serialize;

use crate::modules::time_entries::core::entry::TimeEntry;
use crate::shared::core::grouping::group_by_key;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollupSummary {
    pub client: String,
    pub project: Option<String>,
    pub ticket: String,
    pub ticket_description: Option<String>,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub descriptions: IndexSet<String>,
}

impl RollupSummary {
    fn start(entry: &TimeEntry) -> Self {
        Self {
            client: entry.client.clone(),
            project: entry.project.clone(),
            ticket: entry.ticket.clone().unwrap_or_default(),
            ticket_description: entry.ticket_description.clone(),
            billable_hours: 0.0,
            non_billable_hours: 0.0,
            descriptions: IndexSet::new(),
        }
    }

    fn add(&mut self, entry: TimeEntry) {
        let hours = entry.hours_or_zero();
        if is_billable(entry.billable.as_deref()) {
            self.billable_hours += hours;
        } else {
            self.non_billable_hours += hours;
        }
        if let Some(description) = entry.description {
            let description = description.trim();
            if !description.is_empty() {
                self.descriptions.insert(description.to_string());
            }
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.billable_hours + self.non_billable_hours
    }
}

fn is_billable(billable: Option<&str>) -> bool {
    billable.is_some_and(|b| b.eq_ignore_ascii_case("yes"))
}

fn rollup_key(entry: &TimeEntry) -> Option<String> {
    let ticket = entry.ticket.as_deref()?;
    Some(
        [
            entry.client.as_str(),
            entry.project.as_deref().unwrap_or_default(),
            ticket,
            entry.ticket_description.as_deref().unwrap_or_default(),
        ]
        .join("||"),
    )
}

/// Sums billable and non-billable hours per client, project and ticket.
/// Entries without a ticket are left out.
pub fn project_rollup(entries: Vec<TimeEntry>) -> Vec<RollupSummary> {
    group_by_key(entries, rollup_key, RollupSummary::start, RollupSummary::add)
}
