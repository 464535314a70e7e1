// Shared test fixtures for weekly submissions.
// The transport body is read from json/weekly_submission.json; the validated
// command is derived from it so both stay in step.

use crate::modules::time_entries::core::entry::StaticFields;
use crate::modules::time_entries::use_cases::reconcile_weekly_submission::command::{
    WeeklySubmission, WeeklySubmissionBody,
};
use indexmap::IndexMap;
use std::fs;

const FIXTURE_PATH: &str = "./src/tests/fixtures/commands/json/weekly_submission.json";

pub fn weekly_submission_json() -> serde_json::Value {
    let json_str = fs::read_to_string(FIXTURE_PATH).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub struct WeeklySubmissionBodyBuilder {
    inner: WeeklySubmissionBody,
}

impl Default for WeeklySubmissionBodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WeeklySubmissionBodyBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_value(weekly_submission_json()).unwrap(),
        }
    }

    pub fn group_id(mut self, v: i64) -> Self {
        self.inner.group_id = Some(v);
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = Some(v.into());
        self
    }

    pub fn hours(mut self, v: serde_json::Value) -> Self {
        self.inner.hours_by_date = serde_json::from_value(v).unwrap();
        self
    }

    pub fn build(self) -> WeeklySubmissionBody {
        self.inner
    }
}

pub struct WeeklySubmissionBuilder {
    inner: WeeklySubmission,
}

impl Default for WeeklySubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WeeklySubmissionBuilder {
    pub fn new() -> Self {
        Self {
            inner: WeeklySubmission::try_from(WeeklySubmissionBodyBuilder::new().build()).unwrap(),
        }
    }

    /// Runs `hours` through the same validation a request body goes through.
    pub fn from_json_hours(group_id: i64, hours: serde_json::Value) -> WeeklySubmission {
        let body = WeeklySubmissionBodyBuilder::new()
            .group_id(group_id)
            .hours(hours)
            .build();
        WeeklySubmission::try_from(body).unwrap()
    }

    pub fn group_id(mut self, v: i64) -> Self {
        self.inner.group_id = Some(v);
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn fields(mut self, v: StaticFields) -> Self {
        self.inner.fields = v;
        self
    }

    pub fn hours(mut self, v: &[(&str, f64)]) -> Self {
        self.inner.hours_by_date = v
            .iter()
            .map(|(date, hours)| (date.to_string(), *hours))
            .collect::<IndexMap<_, _>>();
        self
    }

    pub fn build(self) -> WeeklySubmission {
        self.inner
    }
}

#[cfg(test)]
mod weekly_submission_builder_tests {
    use super::*;
    use crate::tests::fixtures::entries::make_static_fields;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_json_fixture() {
        let built = WeeklySubmissionBuilder::default().build();
        assert_eq!(built.group_id, None);
        assert_eq!(built.email, "jane.doe@example.com");
        assert_eq!(built.fields, make_static_fields());
        let hours: Vec<_> = built.hours_by_date.into_iter().collect();
        assert_eq!(
            hours,
            vec![("01-01-2024".to_string(), 4.0), ("02-01-2024".to_string(), 4.0)]
        );
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let built = WeeklySubmissionBuilder::new()
            .group_id(9)
            .email("someone@example.com")
            .hours(&[("05-02-2024", 1.5)])
            .build();
        assert_eq!(built.group_id, Some(9));
        assert_eq!(built.email, "someone@example.com");
        assert_eq!(built.hours_by_date.get("05-02-2024"), Some(&1.5));
        assert_eq!(built.hours_by_date.len(), 1);
    }
}
