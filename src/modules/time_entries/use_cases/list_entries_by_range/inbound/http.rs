use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::modules::time_entries::core::work_date::parse_range;
use crate::modules::time_entries::use_cases::get_horizon::inbound::http::UserRangeParams;
use crate::shell::state::AppState;

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

    match state.list_handler.handle(user.user_id, start, end).await {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => err.into_response(),
    }
}
