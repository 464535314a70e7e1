use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::core::work_date::parse_range;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UserRangeParams {
    pub email: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<UserRangeParams>,
) -> impl IntoResponse {
    let (start, end) =
        match parse_range(params.start_date.as_deref(), params.end_date.as_deref()) {
            Ok(range) => range,
            Err(err) => return err.into_response(),
        };
    let user = match state.resolve_user(params.email.as_deref()).await {
        Ok(user) => user,
        Err(err) => return err.into_response(),
    };

    match state.horizon_handler.handle(user.user_id, start, end).await {
        Ok(horizon) => Json(horizon).into_response(),
        Err(err) => err.into_response(),
    }
}
