use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::time_entries::core::errors::ApplicationError;
use crate::modules::time_entries::use_cases::reconcile_weekly_submission::command::{
    WeeklySubmission, WeeklySubmissionBody,
};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Vec<WeeklySubmissionBody>>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let submissions = match body
        .into_iter()
        .map(WeeklySubmission::try_from)
        .collect::<Result<Vec<_>, ApplicationError>>()
    {
        Ok(submissions) => submissions,
        Err(err) => return err.into_response(),
    };

    match state.reconcile_handler.handle(submissions).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => err.into_response(),
    }
}
