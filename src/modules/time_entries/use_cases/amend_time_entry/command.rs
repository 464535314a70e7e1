use serde::Deserialize;

use crate::modules::time_entries::core::entry::StaticFields;
use crate::modules::time_entries::core::errors::ApplicationError;
use crate::modules::time_entries::core::input::{HoursValue, normalize_hours, optional, required};
use crate::modules::time_entries::core::work_date::require_canonical;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AmendTimeEntryBody {
    pub client: Option<String>,
    pub project: Option<String>,
    pub ticket: Option<String>,
    pub ticket_description: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub billable: Option<String>,
    pub hours: Option<HoursValue>,
    pub date: Option<String>,
}

/// Replacement values for every editable attribute of one stored entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AmendTimeEntry {
    pub fields: StaticFields,
    pub hours: f64,
    pub date: String,
}

impl TryFrom<AmendTimeEntryBody> for AmendTimeEntry {
    type Error = ApplicationError;

    fn try_from(body: AmendTimeEntryBody) -> Result<Self, Self::Error> {
        let fields = StaticFields {
            client: required("client", body.client)?.to_uppercase(),
            project: optional(body.project),
            ticket: required("ticket", body.ticket)?,
            ticket_description: optional(body.ticket_description),
            category: required("category", body.category)?,
            description: optional(body.description),
            billable: required("billable", body.billable)?,
        };
        let date = required("date", body.date)?;
        require_canonical("date", &date)?;
        let hours = normalize_hours(&date, body.hours)?.unwrap_or(0.0);

        Ok(Self {
            fields,
            hours,
            date,
        })
    }
}
