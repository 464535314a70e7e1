use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::time_entries::core::errors::ApplicationError;
use crate::modules::time_entries::core::work_date::parse_range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollupScope {
    Client(String),
    Users(Vec<String>),
    ClientAndUsers { client: String, emails: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupFilter {
    pub scope: RollupScope,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Transport shape of a rollup request. `search_by` is one of `client`,
/// `email` or `both`; when absent it follows from which criteria are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RollupRequestBody {
    pub search_by: Option<String>,
    pub client: Option<String>,
    pub emails: Option<Vec<String>>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TryFrom<RollupRequestBody> for RollupFilter {
    type Error = ApplicationError;

    fn try_from(body: RollupRequestBody) -> Result<Self, Self::Error> {
        let (start, end) = parse_range(body.start_date.as_deref(), body.end_date.as_deref())?;

        let client = body
            .client
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty());
        let emails: Vec<String> = body
            .emails
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();

        let search_by = match body.search_by {
            Some(s) => s.trim().to_lowercase(),
            None => match (client.is_some(), !emails.is_empty()) {
                (true, true) => "both".into(),
                (false, true) => "email".into(),
                _ => "client".into(),
            },
        };

        let scope = match search_by.as_str() {
            "client" => RollupScope::Client(require_client(client)?),
            "email" => RollupScope::Users(require_emails(emails)?),
            "both" => RollupScope::ClientAndUsers {
                client: require_client(client)?,
                emails: require_emails(emails)?,
            },
            other => {
                return Err(ApplicationError::Validation(format!(
                    "search_by must be one of client, email, both; got '{other}'"
                )));
            }
        };

        Ok(Self { scope, start, end })
    }
}

fn require_client(client: Option<String>) -> Result<String, ApplicationError> {
    client.ok_or_else(|| ApplicationError::Validation("client is required".into()))
}

fn require_emails(emails: Vec<String>) -> Result<Vec<String>, ApplicationError> {
    if emails.is_empty() {
        return Err(ApplicationError::Validation(
            "at least one email is required".into(),
        ));
    }
    Ok(emails)
}

#[cfg(test)]
mod rollup_filter_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn body() -> RollupRequestBody {
        RollupRequestBody {
            start_date: Some("01-01-2024".into()),
            end_date: Some("31-01-2024".into()),
            ..Default::default()
        }
    }

    #[rstest]
    fn it_should_upper_case_the_client(body: RollupRequestBody) {
        let filter = RollupFilter::try_from(RollupRequestBody {
            search_by: Some("client".into()),
            client: Some(" acme ".into()),
            ..body
        })
        .unwrap();
        assert_eq!(filter.scope, RollupScope::Client("ACME".into()));
    }

    #[rstest]
    fn it_should_infer_the_scope_from_present_criteria(body: RollupRequestBody) {
        let filter = RollupFilter::try_from(RollupRequestBody {
            client: Some("acme".into()),
            emails: Some(vec!["a@example.com".into(), " ".into()]),
            ..body.clone()
        })
        .unwrap();
        assert_eq!(
            filter.scope,
            RollupScope::ClientAndUsers {
                client: "ACME".into(),
                emails: vec!["a@example.com".into()],
            }
        );

        let filter = RollupFilter::try_from(RollupRequestBody {
            emails: Some(vec!["a@example.com".into()]),
            ..body
        })
        .unwrap();
        assert_eq!(filter.scope, RollupScope::Users(vec!["a@example.com".into()]));
    }

    #[rstest]
    #[case::missing_client(Some("client"), None, None)]
    #[case::missing_emails(Some("email"), Some("acme"), Some(vec![]))]
    #[case::both_needs_client(Some("both"), None, Some(vec!["a@example.com"]))]
    #[case::unknown_mode(Some("team"), Some("acme"), None)]
    #[case::nothing(None, None, None)]
    fn it_should_reject_incomplete_filters(
        body: RollupRequestBody,
        #[case] search_by: Option<&str>,
        #[case] client: Option<&str>,
        #[case] emails: Option<Vec<&str>>,
    ) {
        let result = RollupFilter::try_from(RollupRequestBody {
            search_by: search_by.map(str::to_string),
            client: client.map(str::to_string),
            emails: emails.map(|e| e.into_iter().map(str::to_string).collect()),
            ..body
        });
        assert!(matches!(result, Err(ApplicationError::Validation(_))));
    }

    #[rstest]
    fn it_should_reject_a_missing_range() {
        let result = RollupFilter::try_from(RollupRequestBody {
            client: Some("acme".into()),
            ..Default::default()
        });
        assert!(matches!(result, Err(ApplicationError::Validation(_))));
    }
}
