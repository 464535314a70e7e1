use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_entries::use_cases::reconcile_weekly_submission::command::{
    HoursValue, WeeklySubmission, WeeklySubmissionBody,
};
use crate::modules::time_entries::use_cases::reconcile_weekly_submission::decision::{
    ReconcileOutcome, ReconciliationResult,
};
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct DateHoursInput {
    pub date: String,
    pub hours: Option<f64>,
}

#[derive(InputObject)]
pub struct WeeklySubmissionInput {
    pub group_id: Option<i64>,
    pub email: Option<String>,
    pub client: Option<String>,
    pub project: Option<String>,
    pub ticket: Option<String>,
    pub ticket_description: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub billable: Option<String>,
    pub hours_by_date: Vec<DateHoursInput>,
}

impl From<WeeklySubmissionInput> for WeeklySubmissionBody {
    fn from(input: WeeklySubmissionInput) -> Self {
        Self {
            group_id: input.group_id,
            email: input.email,
            client: input.client,
            project: input.project,
            ticket: input.ticket,
            ticket_description: input.ticket_description,
            category: input.category,
            description: input.description,
            billable: input.billable,
            hours_by_date: Some(
                input
                    .hours_by_date
                    .into_iter()
                    .map(|d| (d.date, d.hours.map(HoursValue::Number)))
                    .collect(),
            ),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlReconciliationResult {
    pub inserted: i32,
    pub updated: i32,
    pub change_log: Vec<String>,
    pub outcome: ReconcileOutcome,
    pub message: String,
}

impl From<ReconciliationResult> for GqlReconciliationResult {
    fn from(r: ReconciliationResult) -> Self {
        Self {
            inserted: r.inserted as i32,
            updated: r.updated as i32,
            change_log: r.change_log,
            outcome: r.outcome,
            message: r.message,
        }
    }
}

#[derive(Default)]
pub struct ReconcileMutation;

#[Object]
impl ReconcileMutation {
    async fn reconcile_weekly_submissions(
        &self,
        context: &Context<'_>,
        submissions: Vec<WeeklySubmissionInput>,
    ) -> GqlResult<GqlReconciliationResult> {
        let state = context.data_unchecked::<AppState>();

        let submissions = submissions
            .into_iter()
            .map(|input| WeeklySubmission::try_from(WeeklySubmissionBody::from(input)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let result = state
            .reconcile_handler
            .handle(submissions)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(result.into())
    }
}
