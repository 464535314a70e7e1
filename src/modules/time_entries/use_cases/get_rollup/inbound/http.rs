use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::time_entries::use_cases::get_rollup::filter::{RollupFilter, RollupRequestBody};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RollupRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let filter = match RollupFilter::try_from(body) {
        Ok(filter) => filter,
        Err(err) => return err.into_response(),
    };

    match state.rollup_handler.handle(filter).await {
        Ok(rollup) => Json(rollup).into_response(),
        Err(err) => err.into_response(),
    }
}
