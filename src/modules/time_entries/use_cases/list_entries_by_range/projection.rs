use crate::modules::time_entries::core::entry::TimeEntry;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeEntryView {
    pub id: i64,
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
    pub hours: f64,
    pub date: String,
}

impl From<TimeEntry> for TimeEntryView {
    fn from(entry: TimeEntry) -> Self {
        Self {
            id: entry.id.unwrap_or_default(),
            group_id: entry.group_id,
            user_id: entry.user_id,
            hours: entry.hours_or_zero(),
            first_name: entry.first_name,
            last_name: entry.last_name,
            client: entry.client,
            project: entry.project,
            ticket: entry.ticket,
            ticket_description: entry.ticket_description,
            category: entry.category,
            description: entry.description,
            billable: entry.billable,
            date: entry.date,
        }
    }
}
