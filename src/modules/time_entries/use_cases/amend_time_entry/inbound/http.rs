use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::time_entries::use_cases::amend_time_entry::command::{
    AmendTimeEntry, AmendTimeEntryBody,
};
use crate::modules::time_entries::use_cases::list_entries_by_range::projection::TimeEntryView;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<AmendTimeEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = match AmendTimeEntry::try_from(body) {
        Ok(command) => command,
        Err(err) => return err.into_response(),
    };

    match state.amend_handler.handle(id, command).await {
        Ok(entry) => Json(TimeEntryView::from(entry)).into_response(),
        Err(err) => err.into_response(),
    }
}
