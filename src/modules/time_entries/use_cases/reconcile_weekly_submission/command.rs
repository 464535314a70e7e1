use indexmap::IndexMap;
use serde::Deserialize;

use crate::modules::time_entries::core::entry::StaticFields;
use crate::modules::time_entries::core::errors::ApplicationError;
pub use crate::modules::time_entries::core::input::HoursValue;
use crate::modules::time_entries::core::input::{normalize_hours, optional, required};
use crate::modules::time_entries::core::work_date::parse_canonical;

/// Transport shape of one weekly row. Every field may be absent so that
/// validation can report what is missing instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeeklySubmissionBody {
    pub group_id: Option<i64>,
    pub email: Option<String>,
    pub client: Option<String>,
    pub project: Option<String>,
    pub ticket: Option<String>,
    pub ticket_description: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub billable: Option<String>,
    pub hours_by_date: Option<IndexMap<String, Option<HoursValue>>>,
}

/// A validated weekly row. `hours_by_date` only holds dates with positive hours,
/// in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySubmission {
    pub group_id: Option<i64>,
    pub email: String,
    pub fields: StaticFields,
    pub hours_by_date: IndexMap<String, f64>,
}

impl TryFrom<WeeklySubmissionBody> for WeeklySubmission {
    type Error = ApplicationError;

    fn try_from(body: WeeklySubmissionBody) -> Result<Self, Self::Error> {
        let email = required("email", body.email)?;
        let fields = StaticFields {
            client: required("client", body.client)?.to_uppercase(),
            project: optional(body.project),
            ticket: required("ticket", body.ticket)?,
            ticket_description: optional(body.ticket_description),
            category: required("category", body.category)?,
            description: optional(body.description),
            billable: required("billable", body.billable)?,
        };

        let raw_hours = body
            .hours_by_date
            .filter(|map| !map.is_empty())
            .ok_or_else(|| ApplicationError::Validation("hours_by_date cannot be empty".into()))?;

        let mut hours_by_date = IndexMap::with_capacity(raw_hours.len());
        for (date, value) in raw_hours {
            if parse_canonical(&date).is_none() {
                return Err(ApplicationError::Validation(format!(
                    "hours_by_date key '{date}' is not a dd-MM-yyyy date"
                )));
            }
            if let Some(hours) = normalize_hours(&date, value)? {
                hours_by_date.insert(date, hours);
            }
        }

        Ok(Self {
            group_id: body.group_id,
            email,
            fields,
            hours_by_date,
        })
    }
}
