use crate::modules::time_entries::core::entry::{StaticFields, TimeEntry, UserRef};
use crate::modules::time_entries::core::work_date::derive_work_date;

pub fn make_user() -> UserRef {
    UserRef {
        user_id: 1,
        email: "jane.doe@example.com".into(),
        first_name: "Jane".into(),
        last_name: "Doe".into(),
    }
}

pub fn make_other_user() -> UserRef {
    UserRef {
        user_id: 2,
        email: "john.roe@example.com".into(),
        first_name: "John".into(),
        last_name: "Roe".into(),
    }
}

pub fn make_static_fields() -> StaticFields {
    StaticFields {
        client: "ACME".into(),
        project: Some("P1".into()),
        ticket: "T1".into(),
        ticket_description: Some("Build the timesheet".into()),
        category: "Development".into(),
        description: Some("Weekly work".into()),
        billable: "Yes".into(),
    }
}

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: TimeEntry::new_for_date(1, &make_user(), &make_static_fields(), "01-01-2024", 4.0),
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = Some(v);
        self
    }

    pub fn group_id(mut self, v: i64) -> Self {
        self.inner.group_id = Some(v);
        self
    }

    pub fn user(mut self, user: &UserRef) -> Self {
        self.inner.user_id = user.user_id;
        self.inner.first_name = user.first_name.clone();
        self.inner.last_name = user.last_name.clone();
        self
    }

    pub fn user_id(mut self, v: i64) -> Self {
        self.inner.user_id = v;
        self
    }

    pub fn date(mut self, v: &str) -> Self {
        self.inner.date = v.to_string();
        self.inner.work_date = derive_work_date(v);
        self
    }

    pub fn hours(mut self, v: Option<f64>) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn client(mut self, v: impl Into<String>) -> Self {
        self.inner.client = v.into();
        self
    }

    pub fn project(mut self, v: Option<&str>) -> Self {
        self.inner.project = v.map(str::to_string);
        self
    }

    pub fn ticket(mut self, v: impl Into<String>) -> Self {
        self.inner.ticket = Some(v.into());
        self
    }

    pub fn no_ticket(mut self) -> Self {
        self.inner.ticket = None;
        self
    }

    pub fn ticket_description(mut self, v: Option<&str>) -> Self {
        self.inner.ticket_description = v.map(str::to_string);
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = Some(v.into());
        self
    }

    pub fn description(mut self, v: Option<&str>) -> Self {
        self.inner.description = v.map(str::to_string);
        self
    }

    pub fn billable(mut self, v: Option<&str>) -> Self {
        self.inner.billable = v.map(str::to_string);
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod time_entry_builder_tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_the_fixture_user_and_fields() {
        let entry = TimeEntryBuilder::default().build();
        assert_eq!(entry.user_id, 1);
        assert_eq!(entry.group_id, Some(1));
        assert_eq!(entry.client, "ACME");
        assert_eq!(entry.date, "01-01-2024");
        assert_eq!(entry.work_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert!(!entry.differs_from(&make_static_fields()));
    }

    #[rstest]
    fn it_should_keep_work_date_in_step_with_date() {
        let entry = TimeEntryBuilder::new().date("15-03-2024").build();
        assert_eq!(entry.work_date, NaiveDate::from_ymd_opt(2024, 3, 15));
    }
}
