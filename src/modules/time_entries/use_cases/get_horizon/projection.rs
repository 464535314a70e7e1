use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use crate::modules::time_entries::core::entry::TimeEntry;
use crate::modules::time_entries::core::errors::ApplicationError;
use crate::modules::time_entries::core::work_date::{CANONICAL_FORMAT, display_label, parse_stored};
use crate::shared::core::grouping::group_by_key;

/// One weekly row of a user's horizon, hours keyed by display label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedEffort {
    pub group_id: Option<i64>,
    pub client: String,
    pub project: Option<String>,
    pub ticket: Option<String>,
    pub ticket_description: Option<String>,
    pub category: Option<String>,
    pub billable: Option<String>,
    pub description: Option<String>,
    pub hours_by_date: IndexMap<String, f64>,
    pub total_hours: f64,
}

#[derive(Debug, Hash, PartialEq, Eq)]
struct RowKey {
    group_id: Option<i64>,
    client: String,
    ticket: Option<String>,
    ticket_description: Option<String>,
    category: Option<String>,
    billable: Option<String>,
    description: Option<String>,
}

impl RowKey {
    fn of(entry: &TimeEntry) -> Self {
        Self {
            group_id: entry.group_id,
            client: entry.client.clone(),
            ticket: entry.ticket.clone(),
            ticket_description: entry.ticket_description.clone(),
            category: entry.category.clone(),
            billable: entry.billable.clone(),
            description: entry.description.clone(),
        }
    }
}

/// Calendar day of a stored date, or its raw text when it does not parse.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum DateKey {
    Day(NaiveDate),
    Raw(String),
}

impl DateKey {
    fn of(raw: &str) -> Self {
        match parse_stored(raw) {
            Some(day) => DateKey::Day(day),
            None => DateKey::Raw(raw.to_string()),
        }
    }

    fn day(&self) -> Option<NaiveDate> {
        match self {
            DateKey::Day(day) => Some(*day),
            DateKey::Raw(_) => None,
        }
    }
}

struct RowAccumulator {
    effort: MergedEffort,
    by_date: IndexMap<DateKey, f64>,
}

impl RowAccumulator {
    fn start(entry: &TimeEntry) -> Self {
        Self {
            effort: MergedEffort {
                group_id: entry.group_id,
                client: entry.client.clone(),
                project: entry.project.clone(),
                ticket: entry.ticket.clone(),
                ticket_description: entry.ticket_description.clone(),
                category: entry.category.clone(),
                billable: entry.billable.clone(),
                description: entry.description.clone(),
                hours_by_date: IndexMap::new(),
                total_hours: 0.0,
            },
            by_date: IndexMap::new(),
        }
    }

    fn add(&mut self, entry: TimeEntry) {
        let date = entry.date.trim();
        if date.is_empty() {
            return;
        }
        *self.by_date.entry(DateKey::of(date)).or_insert(0.0) += entry.hours_or_zero();
    }

    fn finish(self) -> Option<MergedEffort> {
        if self.by_date.is_empty() {
            return None;
        }
        let mut effort = self.effort;

        let mut dated: Vec<_> = self.by_date.into_iter().collect();
        // Chronological, undated keys last in first-seen order.
        dated.sort_by_key(|(key, _)| (key.day().is_none(), key.day()));

        for (key, hours) in dated {
            let (label, fallback) = match key {
                DateKey::Day(day) => (display_label(day), day.format(CANONICAL_FORMAT).to_string()),
                DateKey::Raw(raw) => {
                    let err = ApplicationError::MalformedData(format!(
                        "stored date '{raw}' is not dd-MM-yyyy"
                    ));
                    warn!(group_id = ?effort.group_id, error = %err, "passing raw date through");
                    (raw.clone(), raw)
                }
            };
            let key = if effort.hours_by_date.contains_key(&label) {
                fallback
            } else {
                label
            };
            effort.total_hours += hours;
            effort.hours_by_date.insert(key, hours);
        }
        Some(effort)
    }
}

/// Merges a user's entries into weekly rows. Same-date entries of one row are
/// summed; different dates never are.
pub fn project_horizon(entries: Vec<TimeEntry>) -> Vec<MergedEffort> {
    group_by_key(
        entries,
        |entry| Some(RowKey::of(entry)),
        RowAccumulator::start,
        RowAccumulator::add,
    )
    .into_iter()
    .filter_map(RowAccumulator::finish)
    .collect()
}
