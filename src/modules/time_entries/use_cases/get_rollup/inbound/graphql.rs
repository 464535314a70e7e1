use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_entries::use_cases::get_rollup::filter::{RollupFilter, RollupRequestBody};
use crate::modules::time_entries::use_cases::get_rollup::projection::RollupSummary;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlRollupSummary {
    pub client: String,
    pub project: Option<String>,
    pub ticket: String,
    pub ticket_description: Option<String>,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub descriptions: Vec<String>,
}

impl From<RollupSummary> for GqlRollupSummary {
    fn from(r: RollupSummary) -> Self {
        Self {
            client: r.client,
            project: r.project,
            ticket: r.ticket,
            ticket_description: r.ticket_description,
            billable_hours: r.billable_hours,
            non_billable_hours: r.non_billable_hours,
            descriptions: r.descriptions.into_iter().collect(),
        }
    }
}

#[derive(Default)]
pub struct RollupQuery;

#[Object]
impl RollupQuery {
    async fn rollup(
        &self,
        context: &Context<'_>,
        search_by: Option<String>,
        client: Option<String>,
        emails: Option<Vec<String>>,
        start_date: String,
        end_date: String,
    ) -> GqlResult<Vec<GqlRollupSummary>> {
        let state = context.data_unchecked::<AppState>();
        let filter = RollupFilter::try_from(RollupRequestBody {
            search_by,
            client,
            emails,
            start_date: Some(start_date),
            end_date: Some(end_date),
        })
        .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let rollup = state
            .rollup_handler
            .handle(filter)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(rollup.into_iter().map(Into::into).collect())
    }
}
