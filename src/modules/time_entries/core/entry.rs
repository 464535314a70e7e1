use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::core::work_date::derive_work_date;

/// One persisted per-date time entry.
///
/// Entries that share a `group_id` form one logical weekly row; the store
/// keeps at most one entry per `(group_id, date)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub id: Option<i64>,
    pub group_id: Option<i64>,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub client: String,
    pub project: Option<String>,
    pub ticket: Option<String>,
    pub ticket_description: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub billable: Option<String>,
    pub hours: Option<f64>,
    pub date: String,
    pub work_date: Option<NaiveDate>,
}

/// Attributes a weekly row shares across all of its dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticFields {
    pub client: String,
    pub project: Option<String>,
    pub ticket: String,
    pub ticket_description: Option<String>,
    pub category: String,
    pub description: Option<String>,
    pub billable: String,
}

/// A user as resolved by the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl TimeEntry {
    pub fn new_for_date(
        group_id: i64,
        user: &UserRef,
        fields: &StaticFields,
        date: &str,
        hours: f64,
    ) -> Self {
        Self {
            id: None,
            group_id: Some(group_id),
            user_id: user.user_id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            client: fields.client.clone(),
            project: fields.project.clone(),
            ticket: Some(fields.ticket.clone()),
            ticket_description: fields.ticket_description.clone(),
            category: Some(fields.category.clone()),
            description: fields.description.clone(),
            billable: Some(fields.billable.clone()),
            hours: Some(hours),
            date: date.to_string(),
            work_date: derive_work_date(date),
        }
    }

    pub fn differs_from(&self, fields: &StaticFields) -> bool {
        self.client != fields.client
            || self.project != fields.project
            || self.ticket.as_deref() != Some(fields.ticket.as_str())
            || self.ticket_description != fields.ticket_description
            || self.category.as_deref() != Some(fields.category.as_str())
            || self.description != fields.description
            || self.billable.as_deref() != Some(fields.billable.as_str())
    }

    pub fn overwrite_static_fields(&mut self, user: &UserRef, fields: &StaticFields) {
        self.user_id = user.user_id;
        self.first_name = user.first_name.clone();
        self.last_name = user.last_name.clone();
        self.apply_static_fields(fields);
    }

    pub fn apply_static_fields(&mut self, fields: &StaticFields) {
        self.client = fields.client.clone();
        self.project = fields.project.clone();
        self.ticket = Some(fields.ticket.clone());
        self.ticket_description = fields.ticket_description.clone();
        self.category = Some(fields.category.clone());
        self.description = fields.description.clone();
        self.billable = Some(fields.billable.clone());
        self.work_date = derive_work_date(&self.date);
    }

    pub fn hours_or_zero(&self) -> f64 {
        self.hours.unwrap_or(0.0)
    }
}
