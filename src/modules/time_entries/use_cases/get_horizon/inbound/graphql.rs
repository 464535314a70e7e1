use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_entries::core::work_date::parse_range;
use crate::modules::time_entries::use_cases::get_horizon::projection::MergedEffort;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlDayHours {
    pub label: String,
    pub hours: f64,
}

#[derive(SimpleObject, Clone)]
pub struct GqlMergedEffort {
    pub group_id: Option<i64>,
    pub client: String,
    pub project: Option<String>,
    pub ticket: Option<String>,
    pub ticket_description: Option<String>,
    pub category: Option<String>,
    pub billable: Option<String>,
    pub description: Option<String>,
    pub hours_by_date: Vec<GqlDayHours>,
    pub total_hours: f64,
}

impl From<MergedEffort> for GqlMergedEffort {
    fn from(m: MergedEffort) -> Self {
        Self {
            group_id: m.group_id,
            client: m.client,
            project: m.project,
            ticket: m.ticket,
            ticket_description: m.ticket_description,
            category: m.category,
            billable: m.billable,
            description: m.description,
            hours_by_date: m
                .hours_by_date
                .into_iter()
                .map(|(label, hours)| GqlDayHours { label, hours })
                .collect(),
            total_hours: m.total_hours,
        }
    }
}

#[derive(Default)]
pub struct HorizonQuery;

#[Object]
impl HorizonQuery {
    async fn horizon(
        &self,
        context: &Context<'_>,
        email: String,
        start_date: String,
        end_date: String,
    ) -> GqlResult<Vec<GqlMergedEffort>> {
        let state = context.data_unchecked::<AppState>();
        let (start, end) = parse_range(Some(start_date.as_str()), Some(end_date.as_str()))
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let user = state
            .resolve_user(Some(email.as_str()))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let horizon = state
            .horizon_handler
            .handle(user.user_id, start, end)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(horizon.into_iter().map(Into::into).collect())
    }
}
